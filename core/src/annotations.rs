//! # Annotation Catalog
//!
//! The static Swagger 2.x annotation set this crate knows how to insert,
//! together with the import package and the Spring mapping annotations used
//! to recognize request-handler methods.
#![deny(missing_docs)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Package every generated annotation is imported from.
pub const SWAGGER_PACKAGE: &str = "io.swagger.annotations";

/// Fully qualified Spring mapping annotations that mark a method as a
/// request handler.
pub const MAPPING_ANNOTATIONS: [&str; 6] = [
    "org.springframework.web.bind.annotation.GetMapping",
    "org.springframework.web.bind.annotation.PutMapping",
    "org.springframework.web.bind.annotation.DeleteMapping",
    "org.springframework.web.bind.annotation.PatchMapping",
    "org.springframework.web.bind.annotation.RequestMapping",
    "org.springframework.web.bind.annotation.PostMapping",
];

/// The kind of declaration an annotation attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// A class or interface declaration.
    Class,
    /// A field declaration.
    Field,
    /// A method declaration.
    Method,
    /// A method parameter.
    Parameter,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            TargetKind::Class => "class",
            TargetKind::Field => "field",
            TargetKind::Method => "method",
            TargetKind::Parameter => "parameter",
        };
        write!(f, "{}", word)
    }
}

/// One supported Swagger annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// `@Api`, documents a controller class.
    Api,
    /// `@ApiModel`, documents a plain data class.
    ApiModel,
    /// `@ApiModelProperty`, documents a field.
    ApiModelProperty,
    /// `@ApiOperation`, documents a handler method.
    ApiOperation,
    /// `@ApiParam`, documents a method parameter.
    ApiParam,
}

impl AnnotationKind {
    /// Returns the static spec for this annotation.
    pub fn spec(self) -> &'static AnnotationSpec {
        match self {
            AnnotationKind::Api => &API,
            AnnotationKind::ApiModel => &API_MODEL,
            AnnotationKind::ApiModelProperty => &API_MODEL_PROPERTY,
            AnnotationKind::ApiOperation => &API_OPERATION,
            AnnotationKind::ApiParam => &API_PARAM,
        }
    }

    /// Fully qualified name, used for presence checks against a snapshot.
    pub fn qualified_name(self) -> &'static str {
        self.spec().qualified_name
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = self
            .qualified_name()
            .rsplit('.')
            .next()
            .unwrap_or(self.qualified_name());
        write!(f, "@{}", short)
    }
}

/// Static description of one insertable annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationSpec {
    /// Which annotation this spec describes.
    pub kind: AnnotationKind,
    /// Fully qualified annotation name.
    pub qualified_name: &'static str,
    /// Exact source text inserted before the anchor.
    pub template: &'static str,
    /// Declaration kind this annotation attaches to.
    pub target: TargetKind,
}

const API: AnnotationSpec = AnnotationSpec {
    kind: AnnotationKind::Api,
    qualified_name: "io.swagger.annotations.Api",
    template: "@Api(value = \"\", description = \"\")",
    target: TargetKind::Class,
};

const API_MODEL: AnnotationSpec = AnnotationSpec {
    kind: AnnotationKind::ApiModel,
    qualified_name: "io.swagger.annotations.ApiModel",
    template: "@ApiModel(value = \"\", description = \"\")",
    target: TargetKind::Class,
};

const API_MODEL_PROPERTY: AnnotationSpec = AnnotationSpec {
    kind: AnnotationKind::ApiModelProperty,
    qualified_name: "io.swagger.annotations.ApiModelProperty",
    template: "@ApiModelProperty(value = \"\")",
    target: TargetKind::Field,
};

const API_OPERATION: AnnotationSpec = AnnotationSpec {
    kind: AnnotationKind::ApiOperation,
    qualified_name: "io.swagger.annotations.ApiOperation",
    template: "@ApiOperation(value = \"\", notes = \"\")",
    target: TargetKind::Method,
};

// The template keeps a trailing space so the annotation reads inline
// before the parameter it describes.
const API_PARAM: AnnotationSpec = AnnotationSpec {
    kind: AnnotationKind::ApiParam,
    qualified_name: "io.swagger.annotations.ApiParam",
    template: "@ApiParam(value = \"\") ",
    target: TargetKind::Parameter,
};

/// Every annotation spec this crate can plan, in catalog order.
pub const ANNOTATION_SPECS: [AnnotationSpec; 5] =
    [API, API_MODEL, API_MODEL_PROPERTY, API_OPERATION, API_PARAM];
