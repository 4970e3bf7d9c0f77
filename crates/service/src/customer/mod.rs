pub mod dto;
pub mod repository;
pub mod service;

pub use dto::{CustomerRequest, CustomerResponse};
pub use repository::{CustomerRepository, SeaOrmCustomerRepository};
pub use service::CustomerService;
