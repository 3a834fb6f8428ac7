//! OpenAPI document for the JSON endpoints, served at `/openapi.json`.

use utoipa::OpenApi;

use super::error::ErrorResponse;
use super::handlers::arithmetic::{self, OperandsRequest, ResultResponse};
use super::handlers::calculations::{self, CalculationRequest, CalculationResponse};

#[derive(OpenApi)]
#[openapi(
    info(title = "Calculator", description = "Basic arithmetic over HTTP"),
    paths(
        arithmetic::add_handler,
        arithmetic::subtract_handler,
        arithmetic::multiply_handler,
        arithmetic::divide_handler,
        calculations::calculation_handler,
    ),
    components(schemas(
        OperandsRequest,
        ResultResponse,
        CalculationRequest,
        CalculationResponse,
        ErrorResponse,
    )),
    tags(
        (name = "arithmetic", description = "Two-operand operations"),
        (name = "calculations", description = "Polymorphic calculations over a list of inputs"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_json_endpoint() {
        let doc = ApiDoc::openapi();
        for path in ["/add", "/subtract", "/multiply", "/divide", "/calculations"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
