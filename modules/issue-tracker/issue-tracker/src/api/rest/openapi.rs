//! OpenAPI document for the issues resource, served at `/openapi.json`.

use utoipa::ToSchema;
use utoipa::openapi::path::{
    HttpMethod, Operation, OperationBuilder, Parameter, ParameterBuilder, ParameterIn,
    PathItemBuilder, PathsBuilder,
};
use utoipa::openapi::request_body::{RequestBody, RequestBodyBuilder};
use utoipa::openapi::response::{Response, ResponseBuilder};
use utoipa::openapi::schema::{
    Array, ComponentsBuilder, ObjectBuilder, OneOfBuilder, Schema, SchemaType, Type,
};
use utoipa::openapi::content::ContentBuilder;
use utoipa::openapi::info::InfoBuilder;
use utoipa::openapi::{OpenApi, OpenApiBuilder, Ref, RefOr, Required};

use issue_tracker_sdk::fields::IssueFields;

use super::dto::{
    CreateIssueRequest, DeleteIssueRequest, ErrorReply, IssueDto, ResultReply,
    UpdateIssueRequest,
};
use super::problem::{APPLICATION_PROBLEM_JSON, Problem};

const TAG: &str = "Issues";
const FORM: &str = "application/x-www-form-urlencoded";
const JSON: &str = "application/json";

fn typed_schema(ty: Type) -> Schema {
    Schema::Object(ObjectBuilder::new().schema_type(SchemaType::Type(ty)).build())
}

fn schema_ref(name: &str) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn project_param() -> Parameter {
    ParameterBuilder::new()
        .name("project")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Project the issues belong to"))
        .schema(Some(typed_schema(Type::String)))
        .build()
}

fn filter_param(name: &str, ty: Type) -> Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Query)
        .required(Required::False)
        .description(Some(format!("Only issues whose `{name}` equals this value")))
        .schema(Some(typed_schema(ty)))
        .build()
}

fn body(schema: &str, description: &str) -> RequestBody {
    RequestBodyBuilder::new()
        .description(Some(description))
        .content(
            JSON,
            ContentBuilder::new().schema(Some(schema_ref(schema))).build(),
        )
        .content(
            FORM,
            ContentBuilder::new().schema(Some(schema_ref(schema))).build(),
        )
        .build()
}

fn json_response(description: &str, schema: impl Into<RefOr<Schema>>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
        .build()
}

fn problem_response(description: &str) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(
            APPLICATION_PROBLEM_JSON,
            ContentBuilder::new()
                .schema(Some(schema_ref("Problem")))
                .build(),
        )
        .build()
}

/// A `200` whose body is either the success payload or an `ErrorReply`.
fn result_or_error(description: &str, success: &str) -> Response {
    let one_of = OneOfBuilder::new()
        .item(schema_ref(success))
        .item(schema_ref("ErrorReply"))
        .build();
    json_response(description, Schema::OneOf(one_of))
}

fn list_operation() -> Operation {
    let mut op = OperationBuilder::new()
        .operation_id(Some("issues.list"))
        .summary(Some("List issues of a project"))
        .description(Some(
            "Every query parameter is an exact-match filter; an unknown parameter matches nothing.",
        ))
        .tag(TAG)
        .parameter(project_param());

    for name in [
        IssueFields::ID,
        IssueFields::ISSUE_TITLE,
        IssueFields::ISSUE_TEXT,
        IssueFields::CREATED_BY,
        IssueFields::ASSIGNED_TO,
        IssueFields::STATUS_TEXT,
        IssueFields::CREATED_ON,
        IssueFields::UPDATED_ON,
    ] {
        op = op.parameter(filter_param(name, Type::String));
    }

    op.parameter(filter_param(IssueFields::OPEN, Type::Boolean))
        .response(
            "200",
            json_response(
                "Matching issues",
                Schema::Array(Array::new(schema_ref("IssueDto"))),
            ),
        )
        .response("500", problem_response("Store failure"))
        .build()
}

fn create_operation() -> Operation {
    OperationBuilder::new()
        .operation_id(Some("issues.create"))
        .summary(Some("Create an issue"))
        .tag(TAG)
        .parameter(project_param())
        .request_body(Some(body("CreateIssueRequest", "New issue")))
        .response("200", result_or_error("Created issue", "IssueDto"))
        .response("500", problem_response("Store failure"))
        .build()
}

fn update_operation() -> Operation {
    OperationBuilder::new()
        .operation_id(Some("issues.update"))
        .summary(Some("Update an issue"))
        .tag(TAG)
        .parameter(project_param())
        .request_body(Some(body("UpdateIssueRequest", "Identifier and fields to replace")))
        .response("200", result_or_error("Update outcome", "ResultReply"))
        .build()
}

fn delete_operation() -> Operation {
    OperationBuilder::new()
        .operation_id(Some("issues.delete"))
        .summary(Some("Delete an issue"))
        .tag(TAG)
        .parameter(project_param())
        .request_body(Some(body("DeleteIssueRequest", "Identifier of the issue")))
        .response("200", result_or_error("Delete outcome", "ResultReply"))
        .build()
}

fn with_schema<T: ToSchema>(components: ComponentsBuilder) -> ComponentsBuilder {
    components.schema(T::name(), T::schema())
}

/// Build the document for the resource mounted at `resource_path`.
#[must_use]
pub fn build_openapi(resource_path: &str) -> OpenApi {
    let item = PathItemBuilder::new()
        .operation(HttpMethod::Get, list_operation())
        .operation(HttpMethod::Post, create_operation())
        .operation(HttpMethod::Put, update_operation())
        .operation(HttpMethod::Delete, delete_operation())
        .build();

    let mut components = ComponentsBuilder::new();
    components = with_schema::<IssueDto>(components);
    components = with_schema::<CreateIssueRequest>(components);
    components = with_schema::<UpdateIssueRequest>(components);
    components = with_schema::<DeleteIssueRequest>(components);
    components = with_schema::<ResultReply>(components);
    components = with_schema::<ErrorReply>(components);
    components = with_schema::<Problem>(components);

    let info = InfoBuilder::new()
        .title("Issue Tracker API")
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some("Project-scoped issues"))
        .build();

    OpenApiBuilder::new()
        .info(info)
        .paths(PathsBuilder::new().path(resource_path, item).build())
        .components(Some(components.build()))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_method() {
        let doc = serde_json::to_value(build_openapi("/api/issues/{project}")).unwrap();
        let item = &doc["paths"]["/api/issues/{project}"];

        for method in ["get", "post", "put", "delete"] {
            assert!(item[method].is_object(), "missing {method}");
        }
        assert_eq!(item["get"]["operationId"], "issues.list");
    }

    #[test]
    fn test_document_registers_schemas() {
        let doc = serde_json::to_value(build_openapi("/api/issues/{project}")).unwrap();
        let schemas = &doc["components"]["schemas"];

        for name in ["IssueDto", "UpdateIssueRequest", "ErrorReply", "Problem"] {
            assert!(schemas[name].is_object(), "missing schema {name}");
        }
        assert!(schemas["IssueDto"]["properties"]["_id"].is_object());
    }
}
