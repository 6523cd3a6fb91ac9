use nxdl_xsd::{SchemaNode, SchemaPath, XsdError};
use tracing::{debug, info};

use crate::{
    emitter::NodeEmitter,
    error::GenerateError,
    figures::{figure_block, FigureLocator},
    layout::ManualLayout,
    rst::RstDocument,
};

/// Produces the complete chapter for the schema rooted at `schema`.
///
/// The element overview comes first, then one section per configured data-type location. A
/// location that matches no node fails the whole pass.
pub fn assemble(
    schema: SchemaNode,
    layout: &ManualLayout,
    figures: &dyn FigureLocator,
) -> Result<RstDocument, GenerateError> {
    let emitter = NodeEmitter::new(&layout.headings, &layout.indentation);
    let mut out = RstDocument::new();

    out.print(&format!(
        ".. auto-generated by {} -- DO NOT EDIT",
        module_path!()
    ));
    out.print(&layout.element_preamble);

    let mut elements: Vec<_> = layout.elements.iter().collect();
    elements.sort_by(|a, b| a.name.cmp(&b.name));
    for element in elements {
        let name = &element.name;
        debug!(element = %name, "element overview");
        out.blank();
        out.print(&format!(".. index:: ! {name} (NXDL element)\n"));
        out.print(&format!(".. _{name}:\n"));
        emitter.title(&mut out, name, 0)?;
        out.print("\n");
        out.print(&element.description);
        out.print("\n");
        if let Some(image) = figures.locate(name) {
            out.print(&figure_block(name, &image));
            out.print("\n");
        }
    }

    out.print(&layout.data_type_preamble);

    for location in &layout.data_types {
        let path = SchemaPath::parse(location)?;
        let node = path
            .evaluate(schema)
            .into_iter()
            .next()
            .ok_or_else(|| XsdError::MissingNode {
                path: location.clone(),
            })?;
        debug!(%path, "data type section");
        out.print(&format!("\n.. Xpath = {location}\n"));
        emitter.general(&mut out, node, 0)?;
    }

    out.print(&layout.data_type_postamble);
    info!(lines = out.len(), "chapter assembled");
    Ok(out)
}
