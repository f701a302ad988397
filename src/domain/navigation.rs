/// Client navigation requested by a handler.
///
/// Services return this instead of touching the response; the route layer
/// decides how to carry it out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub location: String,
}

impl Navigation {
    pub fn push(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}
