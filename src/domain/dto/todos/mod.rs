pub mod request;
pub mod response;

pub use request::{CreateTodoRequest, UpdateTodoRequest};
pub use response::{
    MessageResponse, PopulatedTodoResponse, TodoListResponse, TodoOwnerResponse, TodoResponse,
};
