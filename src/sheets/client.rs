//! REST client for the Drive and Sheets APIs.
//!
//! Only three calls are made: find a spreadsheet by name (Drive), read its worksheet
//! titles (Sheets), and append a row of values (Sheets).

use super::{Cell, RowAppender, TokenProvider};
use crate::errors::{Error, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Default base URL for the Drive v3 API
pub const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";
/// Default base URL for the Sheets v4 API
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";

const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

/// Authenticated client for the Drive and Sheets REST APIs
#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    auth: Arc<dyn TokenProvider>,
    drive_base: String,
    sheets_base: String,
}

impl SheetsClient {
    /// Client talking to the public Google endpoints
    #[must_use]
    pub fn new(auth: Arc<dyn TokenProvider>) -> Self {
        Self::with_endpoints(auth, DRIVE_API_BASE, SHEETS_API_BASE)
    }

    /// Client talking to custom endpoints, e.g. a local mock server
    #[must_use]
    pub fn with_endpoints(
        auth: Arc<dyn TokenProvider>,
        drive_base: impl Into<String>,
        sheets_base: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth,
            drive_base: drive_base.into().trim_end_matches('/').to_string(),
            sheets_base: sheets_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Looks up the Drive file id of the first spreadsheet named exactly `name`.
    pub async fn find_spreadsheet_id(&self, name: &str) -> Result<String> {
        let token = self.auth.access_token().await?;
        let response = self
            .http
            .get(format!("{}/files", self.drive_base))
            .bearer_auth(token)
            .query(&[
                ("q", drive_query(name).as_str()),
                ("fields", "files(id,name)"),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ])
            .send()
            .await?;

        let list: FileList = serde_json::from_str(&success_body(response).await?)?;
        list.files
            .into_iter()
            .next()
            .map(|file| file.id)
            .ok_or_else(|| Error::SpreadsheetNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the title of the first worksheet in the spreadsheet.
    pub async fn first_sheet_title(&self, spreadsheet_id: &str) -> Result<String> {
        let token = self.auth.access_token().await?;
        let response = self
            .http
            .get(format!("{}/spreadsheets/{spreadsheet_id}", self.sheets_base))
            .bearer_auth(token)
            .query(&[("fields", "sheets.properties.title")])
            .send()
            .await?;

        let metadata: SpreadsheetMetadata = serde_json::from_str(&success_body(response).await?)?;
        metadata
            .sheets
            .into_iter()
            .next()
            .map(|sheet| sheet.properties.title)
            .ok_or_else(|| Error::NoWorksheets {
                spreadsheet_id: spreadsheet_id.to_string(),
            })
    }

    /// Opens the spreadsheet named `name` and returns its first worksheet.
    pub async fn open_first_worksheet(&self, name: &str) -> Result<Worksheet> {
        let spreadsheet_id = self.find_spreadsheet_id(name).await?;
        let title = self.first_sheet_title(&spreadsheet_id).await?;
        Ok(Worksheet::new(self.clone(), spreadsheet_id, title))
    }

    async fn append_values(&self, spreadsheet_id: &str, range: &str, row: &[Cell]) -> Result<()> {
        let mut url = Url::parse(&format!(
            "{}/spreadsheets/{spreadsheet_id}/values",
            self.sheets_base
        ))
        .map_err(|e| Error::Config {
            message: format!("Invalid Sheets API URL: {e}"),
        })?;
        url.path_segments_mut()
            .map_err(|()| Error::Config {
                message: "Sheets API URL cannot take path segments".to_string(),
            })?
            .push(&format!("{range}:append"));

        let token = self.auth.access_token().await?;
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .query(&[("valueInputOption", "RAW")])
            .json(&serde_json::json!({ "values": [row] }))
            .send()
            .await?;

        success_body(response).await?;
        debug!("Appended {} cells to {range}", row.len());
        Ok(())
    }
}

/// One worksheet inside a spreadsheet; the write target for expense rows
#[derive(Clone)]
pub struct Worksheet {
    client: SheetsClient,
    spreadsheet_id: String,
    title: String,
}

impl Worksheet {
    /// Handle to the worksheet `title` of spreadsheet `spreadsheet_id`
    #[must_use]
    pub const fn new(client: SheetsClient, spreadsheet_id: String, title: String) -> Self {
        Self {
            client,
            spreadsheet_id,
            title,
        }
    }

    /// Worksheet title as shown in the tab bar
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// A1 range anchoring appends to this worksheet
    fn append_range(&self) -> String {
        format!("'{}'!A1", self.title.replace('\'', "''"))
    }
}

#[async_trait]
impl RowAppender for Worksheet {
    async fn append_row(&self, row: &[Cell]) -> Result<()> {
        self.client
            .append_values(&self.spreadsheet_id, &self.append_range(), row)
            .await
    }
}

fn drive_query(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!("name = '{escaped}' and mimeType = '{SPREADSHEET_MIME_TYPE}' and trashed = false")
}

async fn success_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(Error::SheetsApi {
            status: status.as_u16(),
            body,
        })
    }
}
