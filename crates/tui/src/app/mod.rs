use std::time::Duration;

use chrono_tz::Tz;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::{
    client::{Client, ClientError},
    config::AppConfig,
    error::{AppError, Result},
    form::{FormField, FormState},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

use api_types::savings::{SavingsAdded, TransactionView};

/// What the main area shows.
///
/// Starts in `Loading`; `Error` is terminal for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug)]
pub struct AppState {
    pub view: ViewState,
    pub balance: f64,
    pub transactions: Vec<TransactionView>,
    pub form: FormState,
    pub timezone: Tz,
}

impl AppState {
    pub fn new(timezone: Tz) -> Self {
        Self {
            view: ViewState::Loading,
            balance: 0.0,
            transactions: Vec::new(),
            form: FormState::default(),
            timezone,
        }
    }

    pub fn finish_loading(
        &mut self,
        result: std::result::Result<(f64, Vec<TransactionView>), ClientError>,
    ) {
        match result {
            Ok((balance, transactions)) => {
                self.balance = balance;
                self.transactions = transactions;
                self.view = ViewState::Ready;
            }
            Err(err) => {
                tracing::warn!("initial load failed: {err:?}");
                self.balance = 0.0;
                self.transactions.clear();
                self.view = ViewState::Error(err.user_message());
            }
        }
    }

    /// Applies the answer to a submission. A failure keeps what is on screen.
    pub fn finish_submit(&mut self, result: std::result::Result<SavingsAdded, ClientError>) {
        match result {
            Ok(added) => {
                self.balance = added.balance;
                self.transactions = added.transactions;
                self.form.clear_inputs();
                self.form.focus = FormField::Amount;
                self.form.hint = Some("Saving added.".to_string());
            }
            Err(err) => {
                tracing::warn!("submission failed: {err:?}");
                self.view = ViewState::Error(err.user_message());
            }
        }
    }
}

/// Balance and recent history, requested together.
pub async fn fetch_initial(
    client: &Client,
) -> std::result::Result<(f64, Vec<TransactionView>), ClientError> {
    let (balance, transactions) = tokio::join!(client.balance(), client.transactions());
    Ok((balance?.balance, transactions?.transactions))
}

pub struct App {
    client: Client,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let state = AppState::new(config.tz()?);

        Ok(Self {
            client,
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut guard = ui::TerminalGuard::enter()?;
        self.event_loop(guard.terminal()).await
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        self.draw(terminal)?;
        let loaded = fetch_initial(&self.client).await;
        self.state.finish_loading(loaded);

        while !self.should_quit {
            self.draw(terminal)?;

            if event::poll(tick_rate)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key).await;
            }
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut ui::Terminal) -> Result<()> {
        terminal
            .draw(|frame| ui::render(frame, &self.state))
            .map_err(|err| AppError::Terminal(err.to_string()))?;
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);
        if self.state.view != ViewState::Ready {
            if matches!(action, AppAction::Quit | AppAction::Input('q')) {
                self.should_quit = true;
            }
            return;
        }

        let form = &mut self.state.form;
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::NextField => form.next_field(),
            AppAction::PrevField => form.prev_field(),
            AppAction::Backspace => form.pop(),
            AppAction::Left if form.focus == FormField::Method => {
                form.method = form.method.prev();
            }
            AppAction::Right if form.focus == FormField::Method => {
                form.method = form.method.next();
            }
            AppAction::Input(ch) => {
                form.hint = None;
                form.push(ch);
            }
            AppAction::Submit => self.submit().await,
            AppAction::Left | AppAction::Right | AppAction::None => {}
        }
    }

    async fn submit(&mut self) {
        let payload = match self.state.form.to_request() {
            Ok(payload) => payload,
            Err(hint) => {
                self.state.form.hint = Some(hint);
                return;
            }
        };

        let result = self.client.add_savings(&payload).await;
        self.state.finish_submit(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_types::savings::SavingMethod;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, amount: f64) -> TransactionView {
        TransactionView {
            id,
            amount,
            method: SavingMethod::Cash,
            description: "Cash".to_string(),
            date: Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap(),
        }
    }

    fn status(code: u16) -> ClientError {
        ClientError::Status {
            status: code,
            message: None,
        }
    }

    #[test]
    fn starts_loading_with_empty_ledger() {
        let state = AppState::new(chrono_tz::UTC);
        assert_eq!(state.view, ViewState::Loading);
        assert_eq!(state.balance, 0.0);
        assert!(state.transactions.is_empty());
        assert_eq!(state.form.method, SavingMethod::MutualFund);
    }

    #[test]
    fn successful_load_becomes_ready() {
        let mut state = AppState::new(chrono_tz::UTC);
        state.finish_loading(Ok((100.0, vec![record(1, 100.0)])));
        assert_eq!(state.view, ViewState::Ready);
        assert_eq!(state.balance, 100.0);
        assert_eq!(state.transactions.len(), 1);
    }

    #[test]
    fn failed_load_resets_ledger_and_shows_error() {
        let mut state = AppState::new(chrono_tz::UTC);
        state.balance = 12.0;
        state.transactions.push(record(1, 12.0));

        state.finish_loading(Err(status(500)));
        assert_eq!(
            state.view,
            ViewState::Error("HTTP error! status: 500".to_string())
        );
        assert_eq!(state.balance, 0.0);
        assert!(state.transactions.is_empty());
    }

    #[test]
    fn successful_submit_replaces_ledger_and_keeps_method() {
        let mut state = AppState::new(chrono_tz::UTC);
        state.finish_loading(Ok((0.0, Vec::new())));
        state.form.amount = "40".to_string();
        state.form.description = "coins".to_string();
        state.form.method = SavingMethod::Stock;
        state.form.focus = FormField::Method;

        state.finish_submit(Ok(SavingsAdded {
            balance: 40.0,
            transactions: vec![record(7, 40.0)],
        }));

        assert_eq!(state.view, ViewState::Ready);
        assert_eq!(state.balance, 40.0);
        assert_eq!(state.transactions[0].id, 7);
        assert!(state.form.amount.is_empty());
        assert!(state.form.description.is_empty());
        assert_eq!(state.form.method, SavingMethod::Stock);
        assert_eq!(state.form.focus, FormField::Amount);
    }

    #[test]
    fn failed_submit_keeps_ledger() {
        let mut state = AppState::new(chrono_tz::UTC);
        state.finish_loading(Ok((50.0, vec![record(1, 50.0)])));

        state.finish_submit(Err(ClientError::Decode("eof".to_string())));
        assert_eq!(
            state.view,
            ViewState::Error("Received invalid JSON response from server".to_string())
        );
        assert_eq!(state.balance, 50.0);
        assert_eq!(state.transactions.len(), 1);
    }
}
