use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::{
    auth::fetch_access_token,
    credentials::ServiceAccountKey,
    error::{CredentialsError, SheetsError},
    lookup::VaultRow,
    source::TableSource,
};

pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";

pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub api_base_url: String,
    /// Resolved once at startup. A rejected credential is kept so every
    /// lookup reports it instead of the service refusing to start.
    pub credentials: Result<ServiceAccountKey, CredentialsError>,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Reads the first sheet of one spreadsheet through the Sheets v4 REST API.
pub struct SheetsClient {
    http_client: Client,
    api_base_url: Url,
    spreadsheet_id: String,
    credentials: Result<ServiceAccountKey, CredentialsError>,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Result<Self, SheetsError> {
        let api_base_url = Url::parse(&config.api_base_url)?;
        if api_base_url.cannot_be_a_base() {
            return Err(SheetsError::UrlError(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }

        Ok(Self {
            http_client: Client::new(),
            api_base_url,
            spreadsheet_id: config.spreadsheet_id,
            credentials: config.credentials,
        })
    }

    fn spreadsheet_url(&self, extra: &[&str]) -> Result<Url, SheetsError> {
        let mut url = self.api_base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SheetsError::UrlError(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str()])
            .extend(extra);
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        token: &str,
    ) -> Result<T, SheetsError> {
        let response = self
            .http_client
            .get(url)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "Google Sheets request rejected");
            return Err(SheetsError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn first_sheet_title(&self, token: &str) -> Result<String, SheetsError> {
        let mut url = self.spreadsheet_url(&[])?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties.title");

        let meta: SpreadsheetMeta = self.get_json(url, token).await?;
        meta.sheets
            .into_iter()
            .next()
            .map(|sheet| sheet.properties.title)
            .ok_or_else(|| SheetsError::NoSheets(self.spreadsheet_id.clone()))
    }
}

/// A1 range covering a whole sheet.
fn whole_sheet_range(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

fn cell_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[async_trait::async_trait]
impl TableSource for SheetsClient {
    /// Authenticates, then loads every data row of the first sheet.
    /// The first row holds column headers and is dropped.
    async fn load_table(&self) -> Result<Vec<VaultRow>, SheetsError> {
        let credentials = self.credentials.as_ref().map_err(|e| e.clone())?;
        let key = credentials.validate()?;

        let token = fetch_access_token(&self.http_client, &key).await?;
        let title = self.first_sheet_title(&token).await?;

        let range = whole_sheet_range(&title);
        let mut url = self.spreadsheet_url(&["values", range.as_str()])?;
        url.query_pairs_mut().append_pair("majorDimension", "ROWS");

        let values: ValueRange = self.get_json(url, &token).await?;
        let rows: Vec<VaultRow> = values
            .values
            .into_iter()
            .skip(1)
            .map(|cells| cells.into_iter().map(cell_to_string).collect())
            .collect();

        tracing::debug!(
            spreadsheet = %self.spreadsheet_id,
            sheet = %title,
            rows = rows.len(),
            "Loaded vault table",
        );

        Ok(rows)
    }
}
