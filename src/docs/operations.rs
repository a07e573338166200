use super::types::{ApiRoute, ErrorResponse, Operation, ParamLocation, Parameter};
use crate::config::GeneratorConfig;
use crate::resource::{capitalize, DocumentableResource, HttpVerb};
use std::collections::HashSet;

/// Which route of a resource is being documented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `/vegetables`
    Collection,
    /// `/vegetables/{id}`
    Instance,
}

impl Scope {
    /// Whether `verb` is documented on this route.
    ///
    /// `head` is never documented, `post` only creates through the collection and
    /// `put` only updates a single instance. `delete` on the collection (removal
    /// by query) is documented only when the configuration asks for it.
    pub fn documents(&self, verb: HttpVerb, config: &GeneratorConfig) -> bool {
        match verb {
            HttpVerb::Head => false,
            HttpVerb::Post => *self == Scope::Collection,
            HttpVerb::Put => *self == Scope::Instance,
            HttpVerb::Delete => *self == Scope::Instance || config.document_collection_delete,
            HttpVerb::Get => true,
        }
    }
}

/// Path parameter naming the parent of a nested route, e.g. `gooseId`.
pub fn parent_id_param(parent: &dyn DocumentableResource) -> String {
    format!("{}Id", parent.singular())
}

/// Route path for a resource, optionally nested under `parent`.
///
/// ```text
/// /vegetables                      collection
/// /vegetables/{id}                 instance
/// /geese/{gooseId}/stuffings       nested collection
/// /geese/{gooseId}/stuffings/{id}  nested instance
/// ```
pub fn route_path<R>(resource: &R, scope: Scope, parent: Option<&dyn DocumentableResource>) -> String
where
    R: DocumentableResource + ?Sized,
{
    let mut path = String::new();
    if let Some(parent) = parent {
        path.push_str(&format!("/{}/{{{}}}", parent.plural(), parent_id_param(parent)));
    }
    path.push('/');
    path.push_str(resource.plural());
    if scope == Scope::Instance {
        path.push_str("/{id}");
    }
    path
}

fn route_description<R>(resource: &R, scope: Scope, parent: Option<&dyn DocumentableResource>) -> String
where
    R: DocumentableResource + ?Sized,
{
    let base = match scope {
        Scope::Collection => format!("Operations about {}", resource.plural()),
        Scope::Instance => format!("Operations about a given {}", resource.singular()),
    };
    match parent {
        Some(parent) => format!("{base} belonging to a {}", parent.singular()),
        None => base,
    }
}

/// Build the route entry (path, description, operations) for one scope.
pub fn generate_route<R>(
    resource: &R,
    scope: Scope,
    parent: Option<&dyn DocumentableResource>,
    config: &GeneratorConfig,
) -> ApiRoute
where
    R: DocumentableResource + ?Sized,
{
    ApiRoute {
        path: route_path(resource, scope, parent),
        description: route_description(resource, scope, parent),
        operations: generate_operations(resource, scope, parent, config),
    }
}

/// Document every verb the resource supports on the given route.
///
/// Verbs keep the resource's order; a verb listed twice is documented once.
pub fn generate_operations<R>(
    resource: &R,
    scope: Scope,
    parent: Option<&dyn DocumentableResource>,
    config: &GeneratorConfig,
) -> Vec<Operation>
where
    R: DocumentableResource + ?Sized,
{
    let mut seen = HashSet::new();
    resource
        .verbs()
        .iter()
        .copied()
        .filter(|verb| scope.documents(*verb, config) && seen.insert(*verb))
        .map(|verb| Operation {
            http_method: verb.method().as_str().to_string(),
            nickname: nickname(resource, verb, scope, parent),
            response_class: capitalize(resource.singular()),
            summary: summary(resource, verb, scope, parent),
            parameters: generate_parameters(resource, verb, scope, parent, config),
            error_responses: generate_error_responses(resource, scope),
        })
        .collect()
}

/// `getVegetables`, `getVegetableById`, `getStuffingsByGoose`, `getStuffingByIdByGoose`
pub fn nickname<R>(
    resource: &R,
    verb: HttpVerb,
    scope: Scope,
    parent: Option<&dyn DocumentableResource>,
) -> String
where
    R: DocumentableResource + ?Sized,
{
    let mut nickname = match scope {
        Scope::Collection => format!("{}{}", verb.as_str(), capitalize(resource.plural())),
        Scope::Instance => format!("{}{}ById", verb.as_str(), capitalize(resource.singular())),
    };
    if let Some(parent) = parent {
        nickname.push_str("By");
        nickname.push_str(&capitalize(parent.singular()));
    }
    nickname
}

fn summary<R>(
    resource: &R,
    verb: HttpVerb,
    scope: Scope,
    parent: Option<&dyn DocumentableResource>,
) -> String
where
    R: DocumentableResource + ?Sized,
{
    let action = capitalize(verb.as_str());
    let owner = parent
        .map(|p| format!(" belonging to a {}", p.singular()))
        .unwrap_or_default();
    match scope {
        Scope::Collection => format!("{action} some {}{owner}", resource.plural()),
        Scope::Instance => format!(
            "{action} a {}{owner} by its unique ID",
            resource.singular()
        ),
    }
}

fn param(
    location: ParamLocation,
    name: &str,
    description: impl Into<String>,
    data_type: impl Into<String>,
    required: bool,
) -> Parameter {
    Parameter {
        location,
        name: name.to_string(),
        description: description.into(),
        data_type: data_type.into(),
        required,
        allow_multiple: false,
    }
}

/// Parameters for one operation, in documentation order.
pub fn generate_parameters<R>(
    resource: &R,
    verb: HttpVerb,
    scope: Scope,
    parent: Option<&dyn DocumentableResource>,
    config: &GeneratorConfig,
) -> Vec<Parameter>
where
    R: DocumentableResource + ?Sized,
{
    let mut parameters = Vec::new();
    let model = capitalize(resource.singular());

    if let Some(parent) = parent {
        parameters.push(param(
            ParamLocation::Path,
            &parent_id_param(parent),
            format!("The ID of the parent {}", parent.singular()),
            "string",
            true,
        ));
    }

    match scope {
        Scope::Instance => {
            parameters.push(param(
                ParamLocation::Path,
                "id",
                format!("The ID of a {}", resource.singular()),
                "string",
                true,
            ));
            parameters.push(param(
                ParamLocation::Header,
                &config.update_operator_header,
                "**BYPASSES VALIDATION** May be used with PUT to update the document using $push, $pull, or $set.",
                "string",
                false,
            ));
        }
        Scope::Collection => {
            parameters.push(param(
                ParamLocation::Query,
                "skip",
                "How many documents to skip.",
                "int",
                false,
            ));
            parameters.push(param(
                ParamLocation::Query,
                "limit",
                "The maximum number of documents to send.",
                "int",
                false,
            ));
            parameters.push(param(
                ParamLocation::Query,
                "count",
                "Set to true to return count instead of documents.",
                "boolean",
                false,
            ));
            parameters.push(param(
                ParamLocation::Query,
                "conditions",
                "Set the conditions used to find or remove the document(s).",
                "string",
                false,
            ));
            parameters.push(param(
                ParamLocation::Query,
                "sort",
                "Set the fields by which to sort.",
                "string",
                false,
            ));
        }
    }

    parameters.push(param(
        ParamLocation::Query,
        "select",
        "Select which paths will be returned by the query.",
        "string",
        false,
    ));
    parameters.push(param(
        ParamLocation::Query,
        "populate",
        "Specify which paths to populate.",
        "string",
        false,
    ));

    match verb {
        HttpVerb::Post => parameters.push(param(
            ParamLocation::Body,
            "document",
            "Create a document by sending the paths to be updated in the request body.",
            model,
            true,
        )),
        HttpVerb::Put => parameters.push(param(
            ParamLocation::Body,
            "document",
            "Update a document by sending the paths to be updated in the request body.",
            model,
            true,
        )),
        HttpVerb::Get | HttpVerb::Delete | HttpVerb::Head => {}
    }

    parameters
}

// TODO: document 400 and 403 once the HTTP layer reports validation and
// authorization failures with stable reasons.
pub fn generate_error_responses<R>(resource: &R, scope: Scope) -> Vec<ErrorResponse>
where
    R: DocumentableResource + ?Sized,
{
    let reason = match scope {
        Scope::Instance => format!("No {} was found with that ID.", resource.singular()),
        Scope::Collection => format!("No {} matched that query.", resource.plural()),
    };
    vec![ErrorResponse { code: 404, reason }]
}
