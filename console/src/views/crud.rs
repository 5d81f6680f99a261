//! List / search / create / edit / delete screen for one backend collection

use shared::{EntityForm, FormError, FormMode, Language};

use super::state::ViewState;
use super::ViewContext;
use crate::api::{ApiClient, Resource};
use crate::debounce::Debouncer;
use crate::error::{ConsoleError, ConsoleResult, Operation};

type PayloadOf<R> = <<R as Resource>::Form as EntityForm>::Payload;

/// Asks the user to confirm a destructive action
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Management screen for products, employees, suppliers, customers and
/// transactions
pub struct CrudView<R: Resource> {
    api: ApiClient,
    language: Language,
    state: ViewState<R, R::Form>,
    search: String,
    debouncer: Debouncer<String>,
    updates_enabled: bool,
}

impl<R: Resource> CrudView<R> {
    pub fn new(ctx: &ViewContext) -> Self {
        Self {
            api: ctx.api.clone(),
            language: ctx.language,
            state: ViewState::Loading,
            search: String::new(),
            debouncer: Debouncer::new(ctx.debounce),
            updates_enabled: true,
        }
    }

    /// Allow or refuse editing existing records
    pub fn with_updates(mut self, enabled: bool) -> Self {
        self.updates_enabled = enabled;
        self
    }

    pub fn state(&self) -> &ViewState<R, R::Form> {
        &self.state
    }

    pub fn rows(&self) -> &[R] {
        self.state.rows()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn updates_enabled(&self) -> bool {
        self.updates_enabled
    }

    pub fn label(&self) -> &'static str {
        R::label(self.language)
    }

    // ========== Lifecycle ==========

    pub async fn mount(&mut self) {
        self.fetch().await;
    }

    /// Cancel the pending search; in-flight requests are left alone
    pub fn unmount(&mut self) {
        self.debouncer.cancel();
    }

    // ========== Search ==========

    /// Record new search text and restart the debounce timer
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
        self.debouncer.schedule(self.search.clone());
    }

    /// Resolves when the debounce timer for the latest search text fires
    pub async fn search_due(&mut self) -> String {
        self.debouncer.fired().await
    }

    /// Fetch immediately, skipping any pending debounce
    pub async fn refresh(&mut self) {
        self.debouncer.cancel();
        self.fetch().await;
    }

    /// Load the collection for the current search text
    ///
    /// An open form stays open; only its backing rows are replaced.
    pub async fn fetch(&mut self) {
        let previous = if self.state.is_editing() {
            Vec::new()
        } else {
            self.state.take_rows()
        };

        match self.api.list::<R>(&self.search).await {
            Ok(rows) => {
                tracing::debug!(resource = R::NAME, count = rows.len(), search = %self.search, "collection loaded");
                match &mut self.state {
                    ViewState::Editing { rows: current, .. } => *current = rows,
                    _ => self.state = ViewState::Ready { rows },
                }
            }
            Err(err) => {
                let message = self.report(&err, Operation::Load);
                match &mut self.state {
                    ViewState::Editing { error, .. } => *error = Some(message),
                    _ => {
                        self.state = ViewState::Error {
                            message,
                            rows: previous,
                        }
                    }
                }
            }
        }
    }

    // ========== Form ==========

    /// Open an empty form in create mode
    pub fn open_create(&mut self) {
        let rows = self.state.take_rows();
        self.state = ViewState::Editing {
            rows,
            mode: FormMode::Create,
            form: <R::Form as Default>::default(),
            error: None,
        };
    }

    /// Open the form populated from the row with `id`
    pub fn open_edit(&mut self, id: &str) -> ConsoleResult<()> {
        if !self.updates_enabled {
            return Err(ConsoleError::Unsupported {
                resource: R::NAME,
                operation: "update",
            });
        }
        let form = self
            .rows()
            .iter()
            .find(|row| row.id() == id)
            .map(<R::Form as EntityForm>::from_record)
            .ok_or_else(|| ConsoleError::NotFound {
                resource: R::NAME,
                id: id.to_string(),
            })?;

        let rows = self.state.take_rows();
        self.state = ViewState::Editing {
            rows,
            mode: FormMode::Edit(id.to_string()),
            form,
            error: None,
        };
        Ok(())
    }

    /// Apply one edit to the open form
    pub fn set_field(&mut self, field: &str, value: &str) -> ConsoleResult<()> {
        match &mut self.state {
            ViewState::Editing { form, error, .. } => match form.set_field(field, value) {
                Ok(()) => {
                    *error = None;
                    Ok(())
                }
                Err(err) => {
                    *error = Some(err.localized(self.language));
                    Err(err.into())
                }
            },
            _ => Err(ConsoleError::NoForm),
        }
    }

    pub fn cancel_form(&mut self) {
        if self.state.is_editing() {
            let rows = self.state.take_rows();
            self.state = ViewState::Ready { rows };
        }
    }

    pub fn dismiss_error(&mut self) {
        if let ViewState::Error { .. } = self.state {
            let rows = self.state.take_rows();
            self.state = ViewState::Ready { rows };
        }
    }

    /// Submit the open form, then re-fetch on success
    pub async fn save(&mut self) -> ConsoleResult<()> {
        self.save_with(|form| form.payload()).await
    }

    /// Submit using a custom payload builder
    pub async fn save_with<F>(&mut self, prepare: F) -> ConsoleResult<()>
    where
        F: FnOnce(&R::Form) -> Result<PayloadOf<R>, FormError>,
    {
        let (mode, payload) = match &mut self.state {
            ViewState::Editing {
                mode, form, error, ..
            } => match prepare(&*form) {
                Ok(payload) => (mode.clone(), payload),
                Err(err) => {
                    *error = Some(err.localized(self.language));
                    return Err(err.into());
                }
            },
            _ => return Err(ConsoleError::NoForm),
        };

        let result = match &mode {
            FormMode::Create => self.api.create::<R>(&payload).await.map(|_| ()),
            FormMode::Edit(_) if !self.updates_enabled => Err(ConsoleError::Unsupported {
                resource: R::NAME,
                operation: "update",
            }),
            FormMode::Edit(id) => self.api.update::<R>(id, &payload).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                tracing::info!(resource = R::NAME, mode = ?mode, "record saved");
                let rows = self.state.take_rows();
                self.state = ViewState::Ready { rows };
                self.fetch().await;
                Ok(())
            }
            Err(err) => {
                let message = self.report(&err, Operation::Save);
                if let ViewState::Editing { error, .. } = &mut self.state {
                    *error = Some(message);
                }
                Err(err)
            }
        }
    }

    // ========== Delete ==========

    /// Question put to the user before deleting `id`; fails for ids not in the list
    pub fn delete_prompt(&self, id: &str) -> ConsoleResult<String> {
        if !self.rows().iter().any(|row| row.id() == id) {
            return Err(ConsoleError::NotFound {
                resource: R::NAME,
                id: id.to_string(),
            });
        }
        Ok(match self.language {
            Language::Vietnamese => format!("Bạn có chắc chắn muốn xóa {} {}?", self.label(), id),
            Language::English => format!("Delete {} {}?", R::NAME, id),
        })
    }

    /// Delete `id` once confirmed; returns whether a record was deleted
    pub async fn delete<C: Confirm + ?Sized>(&mut self, id: &str, confirm: &mut C) -> ConsoleResult<bool> {
        let prompt = self.delete_prompt(id)?;
        if !confirm.confirm(&prompt) {
            return Ok(false);
        }

        match self.api.delete::<R>(id).await {
            Ok(()) => {
                tracing::info!(resource = R::NAME, id, "record deleted");
                let remove = |rows: &mut Vec<R>| {
                    if let Some(index) = rows.iter().position(|row| row.id() == id) {
                        rows.remove(index);
                    }
                };
                match &mut self.state {
                    ViewState::Editing { rows, .. } => remove(rows),
                    _ => {
                        let mut rows = self.state.take_rows();
                        remove(&mut rows);
                        self.state = ViewState::Ready { rows };
                    }
                }
                Ok(true)
            }
            Err(err) => {
                let message = self.report(&err, Operation::Delete);
                match &mut self.state {
                    // An open form keeps the user's input
                    ViewState::Editing { error, .. } => *error = Some(message),
                    _ => {
                        let rows = self.state.take_rows();
                        self.state = ViewState::Error { message, rows };
                    }
                }
                Err(err)
            }
        }
    }

    // ========== Errors ==========

    /// User-facing message for an error raised by this view
    pub fn explain(&self, err: &ConsoleError, operation: Operation) -> String {
        err.user_message(operation, self.label(), self.language)
    }

    fn report(&self, err: &ConsoleError, operation: Operation) -> String {
        tracing::error!(
            resource = R::NAME,
            code = err.code(),
            operation = ?operation,
            error = %err,
            "request failed"
        );
        self.explain(err, operation)
    }
}
