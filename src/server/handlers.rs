//! MCP tool handlers for the address book.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.
//! Tool parameters arrive as plain strings and are validated into domain types
//! here, before any store operation runs.

use crate::domain::{ContactId, EmailAddress, ValidationError};
use crate::models::{ContactUpdate, NewContact};
use crate::services::ContactService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes address-book operations as tools.
#[derive(Clone)]
pub struct AddressBookMcpServer {
    contact_service: Arc<dyn ContactService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for AddressBookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "address-book".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("In-memory address book - create, update, delete and search contacts by whole words of their name or email.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactInput {
    name: String,
    phone: String,
    email: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CreateContactsParams {
    contacts: Vec<ContactInput>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactUpdateInput {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateContactsParams {
    updates: Vec<ContactUpdateInput>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct DeleteContactsParams {
    ids: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchContactsParams {
    query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    contact_id: String,
}

impl ContactInput {
    fn into_new_contact(self) -> Result<NewContact, ValidationError> {
        Ok(NewContact::new(
            self.name,
            self.phone,
            EmailAddress::new(self.email)?,
        ))
    }
}

impl ContactUpdateInput {
    fn into_update(self) -> Result<ContactUpdate, ValidationError> {
        Ok(ContactUpdate {
            id: ContactId::parse(&self.id)?,
            name: self.name,
            phone: self.phone,
            email: self.email.map(EmailAddress::new).transpose()?,
        })
    }
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn invalid_params(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

#[tool_router]
impl AddressBookMcpServer {
    /// Create a new MCP server over `contact_service`.
    pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
        Self {
            contact_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Create one or more contacts.
    #[tool(
        description = "Create one or more contacts. Each contact needs a name, phone and a valid email address. Returns the created contacts with their assigned ids, in input order."
    )]
    async fn create_contacts(
        &self,
        params: Parameters<CreateContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let contacts = params
            .0
            .contacts
            .into_iter()
            .map(ContactInput::into_new_contact)
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid_params)?;

        tracing::debug!(count = contacts.len(), "MCP Handler: create_contacts called");
        let created = self.contact_service.create_contacts(contacts).await;

        json_result(&created)
    }

    /// Update one or more existing contacts.
    #[tool(
        description = "Update existing contacts by id. Only the supplied fields change. Ids that do not exist are skipped; the result lists only contacts that were updated."
    )]
    async fn update_contacts(
        &self,
        params: Parameters<UpdateContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let updates = params
            .0
            .updates
            .into_iter()
            .map(ContactUpdateInput::into_update)
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid_params)?;

        tracing::debug!(count = updates.len(), "MCP Handler: update_contacts called");
        let updated = self.contact_service.update_contacts(updates).await;

        json_result(&updated)
    }

    /// Delete contacts by id.
    #[tool(description = "Delete contacts by id. Returns how many of the ids existed and were deleted.")]
    async fn delete_contacts(
        &self,
        params: Parameters<DeleteContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ids = params
            .0
            .ids
            .iter()
            .map(|id| ContactId::parse(id))
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid_params)?;

        let deleted = self.contact_service.delete_contacts(ids).await;

        json_result(&serde_json::json!({ "deleted": deleted }))
    }

    /// Search contacts by a single word of their name or email.
    #[tool(
        description = "Find contacts whose name or email contains the query as a whole word (case-insensitive). Words are split on whitespace, commas, '@' and '.', so search for one word at a time."
    )]
    async fn search_contacts(
        &self,
        params: Parameters<SearchContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let matches = self
            .contact_service
            .search_contacts(&params.0.query)
            .await
            .map_err(invalid_params)?;

        json_result(&matches)
    }

    /// Retrieve one contact by id.
    #[tool(description = "Retrieve a single contact by id")]
    async fn get_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = ContactId::parse(&params.0.contact_id).map_err(invalid_params)?;

        let contact = self
            .contact_service
            .get_contact(&id)
            .await
            .ok_or_else(|| McpError {
                code: ErrorCode::RESOURCE_NOT_FOUND,
                message: Cow::from(format!("Contact not found: {}", id)),
                data: None,
            })?;

        json_result(&contact)
    }
}
