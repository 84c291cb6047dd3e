use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Foodbank AI Adapter",
        version = "0.1.0",
        description = "Frontend → Gemini adapter. Receives chat requests, calls Gemini with a schema-constrained prompt, and relays the JSON result."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local dev")
    ),
    tags(
        (name = "generation", description = "Schema-constrained generation endpoints"),
        (name = "health", description = "Liveness")
    ),
    // Handlers (paths)
    paths(
        crate::routes::gemini::generate_food_bank,
        crate::routes::meal::generate_meal,
        crate::routes::health,
    ),
    // Schemas used in requests/responses
    components(
        schemas(
            crate::models::requests::FoodBankRequest,
            crate::models::requests::MealRequest,
            crate::models::common::ErrorMessage
        )
    )
)]
pub struct ApiDoc;
