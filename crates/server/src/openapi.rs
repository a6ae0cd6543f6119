use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    #[schema(example = "Not Found")]
    pub error: String,
    #[schema(example = "not found: student 1")]
    pub message: Option<String>,
}

#[derive(ToSchema)]
pub struct StudentInputDoc {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    #[schema(example = "Mathematics")]
    pub course: Option<String>,
}

#[derive(ToSchema)]
pub struct StudentDoc {
    #[schema(example = 1)]
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub course: Option<String>,
    #[schema(example = "2024-10-01T12:00:00+00:00")]
    pub created_at: String,
    #[schema(example = "2024-10-01T12:00:00+00:00")]
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct StudentPageDoc {
    pub items: Vec<StudentDoc>,
    pub index: u64,
    pub size: u64,
    pub total_count: u64,
    pub total_pages: u64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::create,
        crate::routes::students::list_all,
        crate::routes::students::list_page,
        crate::routes::students::search,
        crate::routes::students::get,
        crate::routes::students::update,
        crate::routes::students::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBodyDoc,
            StudentInputDoc,
            StudentDoc,
            StudentPageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students")
    )
)]
pub struct ApiDoc;
