use utoipa::OpenApi;

use crate::handles;

#[derive(OpenApi)]
#[openapi(
    info(title = "AccessOS gateway"),
    paths(
        handles::login,
        handles::logout,
        handles::list_areas,
        handles::list_doors,
        handles::control_door,
        handles::list_inputs,
        handles::list_outputs,
        handles::control_output,
        handles::list_users,
        handles::list_events,
    ),
    tags(
        (name = "auth", description = "Controller login and logout"),
        (name = "control", description = "Areas, doors, inputs, outputs, users and events")
    )
)]
pub struct ApiDoc;
