//! FacesInitializer trait and the default strategies

use std::fmt;

use faces_config::InitParams;

use crate::Result;

/// View declaration language a runtime is bootstrapped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewLanguage {
    Facelets,
    Jsp,
}

impl fmt::Display for ViewLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewLanguage::Facelets => write!(f, "facelets"),
            ViewLanguage::Jsp => write!(f, "jsp"),
        }
    }
}

/// Strategy that bootstraps the faces runtime of one web application.
pub trait FacesInitializer: Send + Sync {
    /// Name identifying this initializer.
    fn name(&self) -> &str;

    /// View languages the runtime is configured for.
    fn view_languages(&self) -> Vec<ViewLanguage>;

    fn supports_jsp(&self) -> bool {
        self.view_languages().contains(&ViewLanguage::Jsp)
    }

    /// Called once when the application starts.
    ///
    /// Implementations report startup failures as
    /// [`Error::InitFailed`](crate::Error::InitFailed).
    fn init_faces(&self, params: &dyn InitParams) -> Result<()> {
        let _ = params;
        tracing::info!(
            initializer = self.name(),
            languages = ?self.view_languages(),
            "Initializing faces runtime"
        );
        Ok(())
    }

    /// Called once when the application shuts down.
    fn destroy_faces(&self, params: &dyn InitParams) {
        let _ = params;
        tracing::info!(initializer = self.name(), "Destroying faces runtime");
    }
}

impl fmt::Debug for dyn FacesInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacesInitializer")
            .field("name", &self.name())
            .finish()
    }
}

/// Initializer for environments with JSP integration.
#[derive(Debug, Clone, Copy, Default)]
pub struct JspFacesInitializer;

impl JspFacesInitializer {
    pub const NAME: &'static str = "faces.webapp.JspFacesInitializer";

    pub fn new() -> Self {
        Self
    }
}

impl FacesInitializer for JspFacesInitializer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn view_languages(&self) -> Vec<ViewLanguage> {
        vec![ViewLanguage::Facelets, ViewLanguage::Jsp]
    }
}

/// Facelets-only initializer, used when JSP is unavailable or disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceletsInitializer;

impl FaceletsInitializer {
    pub const NAME: &'static str = "faces.webapp.FaceletsInitializer";

    pub fn new() -> Self {
        Self
    }
}

impl FacesInitializer for FaceletsInitializer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn view_languages(&self) -> Vec<ViewLanguage> {
        vec![ViewLanguage::Facelets]
    }
}
