use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

/// Date format used by date inputs and by every date the server accepts
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Text shown in the display region when no goals match the filters
pub const NO_GOALS_MESSAGE: &str = "No goals.";

/// Format a calendar date as YYYY-MM-DD
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a YYYY-MM-DD date input value. Empty or malformed values yield None.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Status the server assigns to a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GoalStatus {
    #[serde(rename = "In progress")]
    InProgress,
    Complete,
    Failed,
}

impl GoalStatus {
    /// Canonical order, matching the order of the status checkboxes
    pub const ALL: [GoalStatus; 3] = [GoalStatus::InProgress, GoalStatus::Complete, GoalStatus::Failed];

    /// Label used both on the wire and in the UI
    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::InProgress => "In progress",
            GoalStatus::Complete => "Complete",
            GoalStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GoalStatus {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| FilterError::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("'{0}' is the only selected status and cannot be deselected")]
    LastStatus(GoalStatus),
    #[error("At least one status must be selected")]
    EmptySelection,
    #[error("Unknown goal status '{0}'")]
    UnknownStatus(String),
}

/// Date range and status selection used to query the goal list.
///
/// Values are immutable: every change produces a new `FilterState`, so a
/// reload always works from the exact filter it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    start: NaiveDate,
    end: NaiveDate,
    statuses: BTreeSet<GoalStatus>,
}

impl FilterState {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        statuses: impl IntoIterator<Item = GoalStatus>,
    ) -> Result<Self, FilterError> {
        let statuses: BTreeSet<GoalStatus> = statuses.into_iter().collect();
        if statuses.is_empty() {
            return Err(FilterError::EmptySelection);
        }
        Ok(Self { start, end, statuses })
    }

    /// Page-load defaults: today through today + `window_days`, every status selected
    pub fn default_for(today: NaiveDate, window_days: u32) -> Self {
        let end = today
            .checked_add_days(Days::new(u64::from(window_days)))
            .unwrap_or(today);
        Self {
            start: today,
            end,
            statuses: GoalStatus::ALL.into_iter().collect(),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn statuses(&self) -> impl Iterator<Item = GoalStatus> + '_ {
        self.statuses.iter().copied()
    }

    pub fn is_selected(&self, status: GoalStatus) -> bool {
        self.statuses.contains(&status)
    }

    pub fn with_start(&self, start: NaiveDate) -> Self {
        Self { start, ..self.clone() }
    }

    pub fn with_end(&self, end: NaiveDate) -> Self {
        Self { end, ..self.clone() }
    }

    /// Flip membership of `status`. Deselecting the sole selected status is rejected.
    pub fn toggled(&self, status: GoalStatus) -> Result<Self, FilterError> {
        let mut statuses = self.statuses.clone();
        if statuses.contains(&status) {
            if statuses.len() == 1 {
                return Err(FilterError::LastStatus(status));
            }
            statuses.remove(&status);
        } else {
            statuses.insert(status);
        }
        Ok(Self { statuses, ..self.clone() })
    }

    /// Listing query for this filter, evaluated against the client's `now`
    pub fn query(&self, now: NaiveDate) -> GoalsQuery {
        GoalsQuery {
            start: self.start,
            end: self.end,
            now,
            statuses: self.statuses.iter().copied().collect(),
        }
    }
}

/// Parameters of `GET /goals`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalsQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Client's local date, so "today" comparisons happen in the user's time zone
    pub now: NaiveDate,
    pub statuses: Vec<GoalStatus>,
}

impl GoalsQuery {
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair("start", &format_date(self.start))
            .append_pair("end", &format_date(self.end))
            .append_pair("now", &format_date(self.now));
        for status in &self.statuses {
            serializer.append_pair("status", status.label());
        }
        serializer.finish()
    }
}

/// Successful response of the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalListing {
    /// Nothing matched the filters
    Empty,
    /// Server-rendered markup, spliced into the page verbatim
    Fragment(String),
}

impl GoalListing {
    pub fn from_response(status: u16, body: String) -> Self {
        if status == 204 || body.trim().is_empty() {
            GoalListing::Empty
        } else {
            GoalListing::Fragment(body)
        }
    }
}

/// Identifies one issued reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Hands out reload tickets; only the most recently issued one may write the display.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    latest: u64,
}

impl LoadSequencer {
    pub fn issue(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u32);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "goal-row-{}", self.0)
    }
}

/// One editable row of the add-goal table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalRow {
    pub id: RowId,
    pub title: String,
    pub notes: String,
    pub due: Option<NaiveDate>,
}

impl GoalRow {
    fn blank(id: RowId) -> Self {
        Self {
            id,
            title: String::new(),
            notes: String::new(),
            due: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Title,
    Notes,
    Due,
}

/// Ordered rows of the add-goal form. Always holds at least one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalInputTable {
    rows: Vec<GoalRow>,
    next_id: u32,
}

impl Default for GoalInputTable {
    fn default() -> Self {
        Self {
            rows: vec![GoalRow::blank(RowId(0))],
            next_id: 1,
        }
    }
}

impl GoalInputTable {
    pub fn rows(&self) -> &[GoalRow] {
        &self.rows
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// The remove control is only usable while more than one row exists
    pub fn remove_enabled(&self) -> bool {
        self.rows.len() > 1
    }

    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(GoalRow::blank(id));
        id
    }

    /// Remove the row with `id`. Unknown ids and the last remaining row are left alone.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        if !self.remove_enabled() {
            return false;
        }
        match self.rows.iter().position(|row| row.id == id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    /// Collapse back to a single blank row
    pub fn reset(&mut self) {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows = vec![GoalRow::blank(id)];
    }

    pub fn update(&mut self, id: RowId, field: RowField, value: &str) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return false;
        };
        match field {
            RowField::Title => row.title = value.to_string(),
            RowField::Notes => row.notes = value.to_string(),
            RowField::Due => row.due = parse_date(value),
        }
        true
    }
}

/// A goal as it is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalEntry {
    pub title: String,
    pub notes: String,
    pub due: Option<NaiveDate>,
}

/// Every row of the input table plus the start date shared by all of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalSubmission {
    entries: Vec<GoalEntry>,
    start: NaiveDate,
}

impl GoalSubmission {
    pub fn from_table(table: &GoalInputTable, today: NaiveDate) -> Self {
        let entries = table
            .rows()
            .iter()
            .map(|row| GoalEntry {
                title: row.title.clone(),
                notes: row.notes.clone(),
                due: row.due,
            })
            .collect();
        Self { entries, start: today }
    }

    pub fn entries(&self) -> &[GoalEntry] {
        &self.entries
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Fields in form order: each row's title, notes and due, then one start per title
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len() * 4);
        for entry in &self.entries {
            pairs.push(("title", entry.title.clone()));
            pairs.push(("notes", entry.notes.clone()));
            pairs.push(("due", entry.due.map(format_date).unwrap_or_default()));
        }
        let start = format_date(self.start);
        pairs.extend(self.entries.iter().map(|_| ("start", start.clone())));
        pairs
    }

    pub fn form_body(&self) -> String {
        encode_pairs(self.form_pairs())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn form_body(&self) -> String {
        encode_pairs([
            ("username", self.username.clone()),
            ("password", self.password.clone()),
        ])
    }
}

fn encode_pairs<I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'static str, String)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        serializer.append_pair(name, &value);
    }
    serializer.finish()
}

/// Look up a single query parameter in a `?a=b&c=d` style search string
pub fn query_param(search: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Malformed client config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Config value '{field}' is invalid: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Client settings. Every field has a default, so an absent config block is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every request; empty means same origin
    pub api_base_url: String,
    pub goals_path: String,
    pub logout_path: String,
    pub login_path: String,
    pub register_path: String,
    pub home_path: String,
    pub session_cookie: String,
    /// Days between the default start and end filter dates
    pub filter_window_days: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            goals_path: "/goals".to_string(),
            logout_path: "/logout".to_string(),
            login_path: "/login".to_string(),
            register_path: "/register".to_string(),
            home_path: "/".to_string(),
            session_cookie: "session_id".to_string(),
            filter_window_days: 7,
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("goals_path", &self.goals_path),
            ("logout_path", &self.logout_path),
            ("login_path", &self.login_path),
            ("register_path", &self.register_path),
            ("home_path", &self.home_path),
        ];
        for (field, path) in paths {
            if !path.starts_with('/') {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must start with '/'",
                });
            }
        }

        if self.session_cookie.is_empty() {
            return Err(ConfigError::Invalid {
                field: "session_cookie",
                reason: "must not be empty",
            });
        }
        if self
            .session_cookie
            .chars()
            .any(|c| c == '=' || c == ';' || c.is_whitespace())
        {
            return Err(ConfigError::Invalid {
                field: "session_cookie",
                reason: "must not contain '=', ';' or whitespace",
            });
        }

        Ok(())
    }

    pub fn goals_listing_url(&self, query: &GoalsQuery) -> String {
        format!("{}{}?{}", self.api_base_url, self.goals_path, query.to_query_string())
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// Login page with the new account's username prefilled
    pub fn login_url_for(&self, username: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("username", username)
            .finish();
        format!("{}?{}", self.login_path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn only(status: GoalStatus) -> FilterState {
        FilterState::new(date("2024-01-01"), date("2024-01-08"), [status]).unwrap()
    }

    #[test]
    fn test_default_filter_covers_a_week_with_all_statuses() {
        let filter = FilterState::default_for(date("2024-02-26"), 7);

        assert_eq!(filter.start(), date("2024-02-26"));
        assert_eq!(filter.end(), date("2024-03-04"));
        assert_eq!(filter.statuses().collect::<Vec<_>>(), GoalStatus::ALL.to_vec());
    }

    #[test]
    fn test_new_filter_rejects_empty_status_selection() {
        let result = FilterState::new(date("2024-01-01"), date("2024-01-08"), Vec::new());
        assert_eq!(result, Err(FilterError::EmptySelection));
    }

    #[test]
    fn test_toggle_sole_status_is_rejected() {
        let filter = only(GoalStatus::InProgress);

        let result = filter.toggled(GoalStatus::InProgress);

        assert_eq!(result, Err(FilterError::LastStatus(GoalStatus::InProgress)));
        assert!(filter.is_selected(GoalStatus::InProgress));
    }

    #[test]
    fn test_repeated_toggles_never_empty_the_selection() {
        let mut filter = FilterState::default_for(date("2024-01-01"), 7);
        let sequence = [
            GoalStatus::Failed,
            GoalStatus::Failed,
            GoalStatus::Failed,
            GoalStatus::Complete,
            GoalStatus::InProgress,
            GoalStatus::InProgress,
            GoalStatus::Complete,
            GoalStatus::Complete,
            GoalStatus::Failed,
            GoalStatus::InProgress,
        ];

        for status in sequence {
            if let Ok(next) = filter.toggled(status) {
                filter = next;
            }
            assert!(filter.statuses().count() >= 1, "selection emptied after toggling {status}");
        }
    }

    #[test]
    fn test_toggle_adds_and_removes_status() {
        let filter = only(GoalStatus::Complete);

        let widened = filter.toggled(GoalStatus::Failed).unwrap();
        assert!(widened.is_selected(GoalStatus::Failed));
        assert!(widened.is_selected(GoalStatus::Complete));

        let narrowed = widened.toggled(GoalStatus::Complete).unwrap();
        assert!(!narrowed.is_selected(GoalStatus::Complete));
        assert_eq!(narrowed.statuses().collect::<Vec<_>>(), vec![GoalStatus::Failed]);
    }

    #[test]
    fn test_date_changes_produce_new_values() {
        let filter = only(GoalStatus::Complete);

        let moved = filter.with_start(date("2023-12-25")).with_end(date("2024-01-31"));

        assert_eq!(filter.start(), date("2024-01-01"));
        assert_eq!(moved.start(), date("2023-12-25"));
        assert_eq!(moved.end(), date("2024-01-31"));
        assert!(moved.is_selected(GoalStatus::Complete));
    }

    #[test]
    fn test_status_labels_round_trip_through_from_str() {
        assert_eq!("In progress".parse::<GoalStatus>(), Ok(GoalStatus::InProgress));
        assert_eq!("Failed".parse::<GoalStatus>(), Ok(GoalStatus::Failed));
        assert_eq!(
            "Pending".parse::<GoalStatus>(),
            Err(FilterError::UnknownStatus("Pending".to_string()))
        );
        assert_eq!(
            serde_json::to_string(&GoalStatus::InProgress).unwrap(),
            "\"In progress\""
        );
    }

    #[test]
    fn test_query_string_for_single_status() {
        let query = only(GoalStatus::Complete).query(date("2024-01-03"));

        assert_eq!(
            query.to_query_string(),
            "start=2024-01-01&end=2024-01-08&now=2024-01-03&status=Complete"
        );
    }

    #[test]
    fn test_query_string_lists_statuses_in_canonical_order() {
        let filter = only(GoalStatus::Failed)
            .toggled(GoalStatus::InProgress)
            .unwrap();

        let query = filter.query(date("2024-01-03")).to_query_string();

        assert!(query.ends_with("&status=In+progress&status=Failed"), "{query}");
    }

    #[test]
    fn test_listing_classification() {
        assert_eq!(GoalListing::from_response(204, String::new()), GoalListing::Empty);
        assert_eq!(GoalListing::from_response(200, "  \n".to_string()), GoalListing::Empty);
        assert_eq!(
            GoalListing::from_response(200, "<table></table>".to_string()),
            GoalListing::Fragment("<table></table>".to_string())
        );
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut sequencer = LoadSequencer::default();

        let first = sequencer.issue();
        assert!(sequencer.is_current(first));

        let second = sequencer.issue();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_single_row_cannot_be_removed() {
        let mut table = GoalInputTable::default();
        let only_row = table.rows()[0].id;

        assert_eq!(table.len(), 1);
        assert!(!table.remove_enabled());
        assert!(!table.remove_row(only_row));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_enabled_with_two_or_more_rows() {
        let mut table = GoalInputTable::default();

        table.add_row();
        assert!(table.remove_enabled());

        table.add_row();
        assert_eq!(table.len(), 3);
        assert!(table.remove_enabled());
    }

    #[test]
    fn test_add_then_remove_restores_prior_state() {
        let mut table = GoalInputTable::default();
        let before_len = table.len();
        let before_enabled = table.remove_enabled();

        let added = table.add_row();
        assert!(table.remove_row(added));

        assert_eq!(table.len(), before_len);
        assert_eq!(table.remove_enabled(), before_enabled);
    }

    #[test]
    fn test_removing_unknown_row_is_a_no_op() {
        let mut table = GoalInputTable::default();
        let added = table.add_row();
        table.remove_row(added);
        table.add_row();

        assert!(!table.remove_row(added));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_reset_collapses_to_one_blank_row() {
        let mut table = GoalInputTable::default();
        let first = table.rows()[0].id;
        table.update(first, RowField::Title, "Run");
        table.add_row();
        table.add_row();

        table.reset();

        assert_eq!(table.len(), 1);
        assert!(!table.remove_enabled());
        assert_eq!(table.rows()[0].title, "");
        assert_ne!(table.rows()[0].id, first);
    }

    #[test]
    fn test_update_parses_due_date() {
        let mut table = GoalInputTable::default();
        let id = table.rows()[0].id;

        assert!(table.update(id, RowField::Due, "2024-02-01"));
        assert_eq!(table.rows()[0].due, Some(date("2024-02-01")));

        assert!(table.update(id, RowField::Due, ""));
        assert_eq!(table.rows()[0].due, None);
    }

    #[test]
    fn test_submission_pairs_start_dates_with_titles() {
        let mut table = GoalInputTable::default();
        let first = table.rows()[0].id;
        table.update(first, RowField::Title, "A");
        table.update(first, RowField::Due, "2024-02-01");
        let second = table.add_row();
        table.update(second, RowField::Title, "B");
        table.update(second, RowField::Notes, "with notes");
        table.update(second, RowField::Due, "2024-02-02");

        let submission = GoalSubmission::from_table(&table, date("2024-01-15"));
        let pairs = submission.form_pairs();

        let values = |name: &str| -> Vec<String> {
            pairs
                .iter()
                .filter(|(key, _)| *key == name)
                .map(|(_, value)| value.clone())
                .collect()
        };
        assert_eq!(values("title"), vec!["A", "B"]);
        assert_eq!(values("due"), vec!["2024-02-01", "2024-02-02"]);
        assert_eq!(values("notes"), vec!["", "with notes"]);
        assert_eq!(values("start"), vec!["2024-01-15", "2024-01-15"]);
    }

    #[test]
    fn test_submission_form_body_encoding() {
        let mut table = GoalInputTable::default();
        let id = table.rows()[0].id;
        table.update(id, RowField::Title, "Read 2 books");
        table.update(id, RowField::Notes, "fiction & poetry");
        table.update(id, RowField::Due, "2024-03-01");

        let body = GoalSubmission::from_table(&table, date("2024-02-20")).form_body();

        assert_eq!(
            body,
            "title=Read+2+books&notes=fiction+%26+poetry&due=2024-03-01&start=2024-02-20"
        );
    }

    #[test]
    fn test_credentials_form_body() {
        let credentials = Credentials {
            username: "ada".to_string(),
            password: "p@ss word".to_string(),
        };

        assert_eq!(credentials.form_body(), "username=ada&password=p%40ss+word");
    }

    #[test]
    fn test_query_param_lookup() {
        assert_eq!(query_param("?username=ada%20l", "username"), Some("ada l".to_string()));
        assert_eq!(query_param("a=1&b=2", "b"), Some("2".to_string()));
        assert_eq!(query_param("", "username"), None);
    }

    #[test]
    fn test_config_defaults_when_fields_missing() {
        let config = ClientConfig::from_json(r#"{ "api_base_url": "https://goals.example" }"#).unwrap();

        assert_eq!(config.api_base_url, "https://goals.example");
        assert_eq!(config.goals_path, "/goals");
        assert_eq!(config.session_cookie, "session_id");
        assert_eq!(config.filter_window_days, 7);
        assert_eq!(config.endpoint(&config.logout_path), "https://goals.example/logout");
    }

    #[test]
    fn test_config_rejects_relative_path() {
        let result = ClientConfig::from_json(r#"{ "goals_path": "goals" }"#);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: "goals_path", .. })
        ));
    }

    #[test]
    fn test_config_rejects_bad_cookie_name() {
        let result = ClientConfig::from_json(r#"{ "session_cookie": "session id" }"#);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: "session_cookie", .. })
        ));

        let result = ClientConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }

    #[test]
    fn test_login_url_after_registration_round_trips_username() {
        let config = ClientConfig::default();

        let url = config.login_url_for("ada lovelace&co");

        assert_eq!(url, "/login?username=ada+lovelace%26co");
        let search = url.split_once('?').map(|(_, search)| search).unwrap();
        assert_eq!(query_param(search, "username"), Some("ada lovelace&co".to_string()));
    }

    #[test]
    fn test_config_rejects_relative_register_path() {
        let result = ClientConfig::from_json(r#"{ "register_path": "register" }"#);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: "register_path", .. })
        ));
        assert_eq!(ClientConfig::default().register_path, "/register");
    }

    #[test]
    fn test_listing_url_uses_base_and_query() {
        let config = ClientConfig::default();
        let query = only(GoalStatus::Complete).query(date("2024-01-01"));

        assert_eq!(
            config.goals_listing_url(&query),
            "/goals?start=2024-01-01&end=2024-01-08&now=2024-01-01&status=Complete"
        );
    }
}
