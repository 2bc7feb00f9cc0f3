//! State behind the record manager screen.
//!
//! Writes never touch the local collection: every successful create, update
//! or delete is followed by a full reload.

use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::time::Instant;

use crate::aggregator::{fetch_all_records, sort_records};
use crate::api::{DnsApiClient, DnsRecord};
use crate::config::{save_config, Config, KeyValueStore, SettingsForm};
use crate::error::{Error, Result};
use crate::records::RecordForm;
use crate::view::ViewModel;

/// How long a notification stays visible.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message shown after an action.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    raised_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= NOTIFICATION_TIMEOUT
    }
}

pub struct DnsManager<C, S> {
    client: C,
    store: S,
    config: Config,
    view: ViewModel,
    loading: bool,
    load_error: Option<String>,
    notification: Option<Notification>,
    delete_target: Option<DnsRecord>,
}

impl<C: DnsApiClient, S: KeyValueStore> DnsManager<C, S> {
    /// Reads the stored configuration.
    pub fn open(client: C, store: S) -> Result<Self> {
        let config = crate::config::load_config(&store)?;
        Ok(Self::with_config(client, store, config))
    }

    pub fn with_config(client: C, store: S, config: Config) -> Self {
        Self {
            client,
            store,
            view: ViewModel::new(config.per_page as usize),
            config,
            loading: false,
            load_error: None,
            notification: None,
            delete_target: None,
        }
    }

    /// Loads the records, or fails with `ConfigurationInvalid` when the
    /// settings view has to be shown first.
    pub async fn start(&mut self) -> Result<()> {
        self.ensure_configured()?;
        self.load_records().await
    }

    fn ensure_configured(&self) -> Result<()> {
        if !self.config.is_valid() {
            let missing: Vec<&str> = [
                ("API key", &self.config.api_key),
                ("zone ID", &self.config.zone_id),
                ("domain", &self.config.domain),
            ]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();
            return Err(Error::ConfigurationInvalid(format!(
                "missing {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }

    /// Rebuilds the collection from the provider. On failure the previous
    /// collection stays and the error is kept for the banner.
    pub async fn load_records(&mut self) -> Result<()> {
        self.loading = true;
        self.load_error = None;

        let result = fetch_all_records(&self.client, &self.config.access()).await;
        self.loading = false;

        match result {
            Ok(mut records) => {
                sort_records(&mut records);
                self.view.set_records(records);
                Ok(())
            }
            Err(e) => {
                error!("Failed to load records: {}", e);
                self.load_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn settings_form(&self) -> SettingsForm {
        SettingsForm::from(&self.config)
    }

    /// Persists the settings and reloads when they are complete.
    pub async fn save_settings(&mut self, form: &SettingsForm) -> Result<()> {
        let mut config = self.config.clone();
        config.apply(form);

        if let Err(e) = save_config(&mut self.store, &config) {
            self.notify(NotificationKind::Error, e.to_string());
            return Err(e);
        }

        self.config = config;
        self.view.set_per_page(self.config.per_page as usize);
        info!("Settings saved for {}", self.zone_label());
        self.notify(NotificationKind::Success, "Settings saved");

        self.ensure_configured()?;
        self.load_records().await
    }

    /// Creates or updates depending on whether the form has an id. A
    /// failure leaves the collection as it was.
    pub async fn submit_record(&mut self, form: &RecordForm) -> Result<DnsRecord> {
        let body = match form.to_body() {
            Ok(body) => body,
            Err(e) => {
                self.notify(NotificationKind::Error, e.to_string());
                return Err(e);
            }
        };

        let access = self.config.access();
        let result = match &form.id {
            Some(id) => self.client.update_record(&access, id, &body).await,
            None => self.client.create_record(&access, &body).await,
        };

        match result {
            Ok(record) => {
                let message = if form.is_edit() {
                    "Record updated"
                } else {
                    "Record created"
                };
                self.notify(NotificationKind::Success, message);
                self.reload_after_write().await;
                Ok(record)
            }
            Err(e) => {
                warn!("Failed to save record {}: {}", body.name, e);
                self.notify(NotificationKind::Error, e.to_string());
                Err(e)
            }
        }
    }

    /// Marks a record for deletion and returns the confirmation prompt.
    pub fn request_delete(&mut self, record: &DnsRecord) -> String {
        let prompt = format!("Delete {} record \"{}\"?", record.r#type, record.name);
        self.delete_target = Some(record.clone());
        prompt
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
    }

    pub fn delete_target(&self) -> Option<&DnsRecord> {
        self.delete_target.as_ref()
    }

    /// Deletes the confirmed record. Without a pending target this does
    /// nothing.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        let Some(target) = self.delete_target.clone() else {
            return Ok(());
        };

        match self
            .client
            .delete_record(&self.config.access(), &target.id)
            .await
        {
            Ok(()) => {
                self.notify(NotificationKind::Success, "Record deleted");
                self.delete_target = None;
                self.reload_after_write().await;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to delete record {}: {}", target.name, e);
                self.notify(NotificationKind::Error, e.to_string());
                Err(e)
            }
        }
    }

    async fn reload_after_write(&mut self) {
        if let Err(e) = self.load_records().await {
            debug!("Reload after write failed: {}", e);
        }
    }
}

impl<C, S> DnsManager<C, S> {
    fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
            kind,
            raised_at: Instant::now(),
        });
    }

    /// The current notification, unless it has timed out.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification
            .as_ref()
            .filter(|n| !n.is_expired(Instant::now()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewModel {
        &mut self.view
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Persistent banner text of the last failed load.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn zone_label(&self) -> &str {
        if self.config.domain.is_empty() {
            "Not configured"
        } else {
            &self.config.domain
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
