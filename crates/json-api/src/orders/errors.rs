//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use prato_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::EmptyCart => {
            StatusError::unprocessable_entity().brief("Cart is empty")
        }
        OrdersServiceError::ProductNotFound(product) => {
            StatusError::conflict().brief(format!("Product {product} is no longer available"))
        }
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::InvalidTransition { from, to } => {
            StatusError::bad_request().brief(format!("Cannot move order from {from} to {to}"))
        }
        OrdersServiceError::RoleRequired(role) => {
            StatusError::forbidden().brief(format!("Operation requires the {role} role"))
        }
        OrdersServiceError::Session(source) => {
            error!("session store failure: {source}");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
