//! Viewer selection for device-side image display.

/// Recognized image classes, keyed by lowercase file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerClass {
    Koa,
    Zx,
    Vdc,
}

impl ViewerClass {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "koa" => Some(Self::Koa),
            "zx" => Some(Self::Zx),
            "vdc" => Some(Self::Vdc),
            _ => None,
        }
    }

    /// Device viewer program bound to this class.
    pub fn viewer(self) -> &'static str {
        match self {
            Self::Koa => "koa-viewer",
            Self::Zx => "zx-viewer",
            Self::Vdc => "vdc-viewer",
        }
    }

    /// Pick one viewer for a whole invocation.
    ///
    /// A single recognized class across every filename selects that
    /// class's viewer. Everything else (mixed classes, any unrecognized
    /// or missing extension) falls back to the Vdc default.
    pub fn select<'a, I>(names: I) -> &'static str
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut chosen: Option<ViewerClass> = None;
        let mut other = false;

        for name in names {
            match extension_of(name).as_deref().and_then(Self::from_extension) {
                Some(class) => match chosen {
                    None => chosen = Some(class),
                    Some(prev) if prev == class => {}
                    Some(_) => other = true,
                },
                None => other = true,
            }
        }

        match (chosen, other) {
            (Some(class), false) => class.viewer(),
            _ => Self::Vdc.viewer(),
        }
    }
}

/// Lowercase extension of the final path component, or `None` when no
/// dot appears in it.
fn extension_of(name: &str) -> Option<String> {
    let base = name.rsplit('/').next().unwrap_or(name);
    base.rfind('.').map(|i| base[i + 1..].to_ascii_lowercase())
}
