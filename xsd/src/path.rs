use std::{fmt, str::FromStr};

use roxmltree::Node;

use crate::{error::XsdError, node::SchemaNode, XSD_NAMESPACE};

/// The only namespace prefix structural paths may use.
pub const XSD_PREFIX: &str = "xs";

/// One location step: an XSD element name with an optional `[@name='...']` predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Step {
    local_name: String,
    name: Option<String>,
}

impl Step {
    fn matches(&self, node: Node) -> bool {
        let tag = node.tag_name();
        node.is_element()
            && tag.namespace() == Some(XSD_NAMESPACE)
            && tag.name() == self.local_name
            && self
                .name
                .as_deref()
                .map_or(true, |name| node.attribute("name") == Some(name))
    }
}

/// A child-axis path through the schema tree, such as `xs:sequence/xs:element` or
/// `/xs:schema/xs:complexType[@name='fieldType']`.
///
/// Only the child axis is supported. Absolute paths start at the document, so their first step
/// names the root element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaPath {
    absolute: bool,
    steps: Vec<Step>,
}

impl SchemaPath {
    /// Builds a relative path from unprefixed XSD element names.
    pub fn relative(local_names: &[&str]) -> Self {
        Self {
            absolute: false,
            steps: local_names
                .iter()
                .map(|local_name| Step {
                    local_name: (*local_name).to_owned(),
                    name: None,
                })
                .collect(),
        }
    }

    pub fn parse(source: &str) -> Result<Self, XsdError> {
        let invalid = |reason| XsdError::InvalidPath {
            path: source.to_owned(),
            reason,
        };
        let (absolute, body) = match source.strip_prefix('/') {
            Some(body) => (true, body),
            None => (false, source),
        };
        if body.is_empty() {
            return Err(invalid("path has no steps"));
        }
        let steps = body
            .split('/')
            .map(|step| Self::parse_step(step).map_err(|e| e.with_path(source)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { absolute, steps })
    }

    fn parse_step(step: &str) -> Result<Step, StepError> {
        if step.is_empty() {
            return Err(StepError::Invalid("the descendant axis is not supported"));
        }
        let (qualified, predicate) = match step.split_once('[') {
            Some((qualified, rest)) => {
                let predicate = rest
                    .strip_suffix(']')
                    .ok_or(StepError::Invalid("unterminated predicate"))?;
                (qualified, Some(predicate))
            }
            None => (step, None),
        };
        let (prefix, local_name) = qualified
            .split_once(':')
            .ok_or(StepError::Invalid("steps must be namespace-qualified"))?;
        if prefix != XSD_PREFIX {
            return Err(StepError::UnboundPrefix(prefix.to_owned()));
        }
        if local_name.is_empty() {
            return Err(StepError::Invalid("step has no element name"));
        }
        let name = predicate.map(Self::parse_name_predicate).transpose()?;
        Ok(Step {
            local_name: local_name.to_owned(),
            name,
        })
    }

    fn parse_name_predicate(predicate: &str) -> Result<String, StepError> {
        let value = predicate
            .strip_prefix("@name=")
            .ok_or(StepError::Invalid("only [@name='...'] predicates are supported"))?;
        ['\'', '"']
            .into_iter()
            .find_map(|quote| {
                value
                    .strip_prefix(quote)
                    .and_then(|v| v.strip_suffix(quote))
            })
            .map(str::to_owned)
            .ok_or(StepError::Invalid("predicate value must be quoted"))
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Every node reached from `context` by following the steps, in document order.
    pub fn evaluate<'a, 'input>(
        &self,
        context: SchemaNode<'a, 'input>,
    ) -> Vec<SchemaNode<'a, 'input>> {
        let start = if self.absolute {
            context.as_xml().document().root()
        } else {
            context.as_xml()
        };
        let mut current = vec![start];
        for step in &self.steps {
            current = current
                .into_iter()
                .flat_map(move |node| node.children().filter(move |child| step.matches(*child)))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current.into_iter().map(SchemaNode::new).collect()
    }
}

enum StepError {
    Invalid(&'static str),
    UnboundPrefix(String),
}

impl StepError {
    fn with_path(self, path: &str) -> XsdError {
        match self {
            Self::Invalid(reason) => XsdError::InvalidPath {
                path: path.to_owned(),
                reason,
            },
            Self::UnboundPrefix(prefix) => XsdError::UnboundPrefix { prefix },
        }
    }
}

impl FromStr for SchemaPath {
    type Err = XsdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            f.write_str("/")?;
        }
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{XSD_PREFIX}:{}", step.local_name)?;
            if let Some(name) = &step.name {
                write!(f, "[@name='{name}']")?;
            }
        }
        Ok(())
    }
}
