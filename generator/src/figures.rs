use std::path::{Path, PathBuf};

use tracing::debug;

/// Finds the diagram image for an NXDL element, if one exists.
pub trait FigureLocator {
    /// The image path as it should appear in the figure directive, relative to the
    /// documentation source root.
    fn locate(&self, element: &str) -> Option<String>;
}

/// Never finds a figure.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoFigures;

impl FigureLocator for NoFigures {
    fn locate(&self, _element: &str) -> Option<String> {
        None
    }
}

/// Looks for `img/nxdl/nxdl_<element>.png` below a Sphinx documentation source root.
#[derive(Clone, Debug)]
pub struct SphinxFigures {
    source_root: PathBuf,
}

impl SphinxFigures {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn image_path(element: &str) -> String {
        format!("img/nxdl/nxdl_{element}.png")
    }
}

impl FigureLocator for SphinxFigures {
    fn locate(&self, element: &str) -> Option<String> {
        let image = Self::image_path(element);
        let file = self.source_root.join(&image);
        if file.is_file() {
            debug!(element, file = %file.display(), "figure found");
            Some(image)
        } else {
            debug!(element, file = %file.display(), "no figure");
            None
        }
    }
}

/// The `compound` block showing the diagram of `element`.
pub fn figure_block(element: &str, image: &str) -> String {
    format!(
        r#"
.. compound::

    .. _fig.nxdl_{element}:

    .. figure:: {image}
        :alt: fig.nxdl/nxdl_{element}
        :width: 80%

        Graphical representation of the NXDL ``{element}`` element

    .. Images of NXDL structure are generated from nxdl.xsd source
        using the Eclipse XML Schema Editor (Web Tools Platform).  Open the nxdl.xsd file and choose the
        "Design" tab.  Identify the structure to be documented and double-click to expand
        as needed to show the detail.  Use the XSD > "Export Diagram as Image ..." menu item (also available
        as button in top toolbar).
        Set the name: "nxdl_{element}.png" and move the file into the correct location using
        your operating system's commands.  Commit the revision to version control.
"#
    )
}
