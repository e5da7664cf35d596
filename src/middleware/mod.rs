pub mod request_id;
pub mod response_logger;

pub use request_id::{
    correlation_id_middleware, make_span_with_correlation_id, CorrelationId,
    CORRELATION_ID_HEADER,
};
pub use response_logger::log_failed_responses;
