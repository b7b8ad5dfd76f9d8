//! One-call-per-operation wrapper used by presentation code.
//!
//! `TodoService` pairs a `TodoClient` with a `Transport`: every method
//! builds a request, executes it once and parses the response.

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{CreateTodo, CreatedTodo, TodoItem};

#[derive(Debug, Clone)]
pub struct TodoService<T = UreqTransport> {
    client: TodoClient,
    transport: T,
}

impl Default for TodoService<UreqTransport> {
    fn default() -> Self {
        Self::with_transport(TodoClient::default(), UreqTransport::new())
    }
}

impl TodoService<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(TodoClient::new(base_url), UreqTransport::new())
    }
}

impl<T: Transport> TodoService<T> {
    pub fn with_transport(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub fn list_todos(&self) -> Result<Vec<TodoItem>, ApiError> {
        let response = self.transport.execute(self.client.build_list_todos())?;
        self.client.parse_list_todos(response)
    }

    pub fn get_todo(&self, id: i64) -> Result<TodoItem, ApiError> {
        let response = self.transport.execute(self.client.build_get_todo(id))?;
        self.client.parse_get_todo(response)
    }

    pub fn add_todo(&self, input: &CreateTodo) -> Result<CreatedTodo, ApiError> {
        let request = self.client.build_create_todo(input)?;
        let response = self.transport.execute(request)?;
        self.client.parse_create_todo(response)
    }

    /// Replace the stored item whose id is `item.id`.
    pub fn update_todo(&self, item: &TodoItem) -> Result<(), ApiError> {
        let request = self.client.build_update_todo(item.id, item)?;
        let response = self.transport.execute(request)?;
        self.client.parse_update_todo(response)
    }

    pub fn delete_todo(&self, id: i64) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete_todo(id))?;
        self.client.parse_delete_todo(response)
    }
}
