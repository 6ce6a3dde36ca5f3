//! Process-wide custom-element table and the registration entry point.
//!
//! The registry models the platform's global tag → element-class table. It
//! enforces only the platform's own rules (tag must contain a hyphen, one
//! class per tag); the bridge adds no uniqueness tracking of its own, and a
//! conflict propagates to the caller of [`register`].

use crate::element::BridgeElement;
use crate::error::RegistryError;
use crate::host::{Element, ElementClass, HostElement};
use crate::options::BridgeOptions;
use crate::program::Program;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Tag → element-class table for one host platform.
///
/// Uses `RefCell` for single-threaded interior mutability; all registration
/// and instantiation happens on the host's UI task queue.
pub struct ElementRegistry<E: HostElement> {
    definitions: RefCell<HashMap<String, Rc<dyn ElementClass<E>>>>,
}

impl<E: HostElement> ElementRegistry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            definitions: RefCell::new(HashMap::new()),
        }
    }

    /// Bind a tag to an element class.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidName`] if the tag has no hyphen
    /// - [`RegistryError::DuplicateTag`] if the tag is already bound
    pub fn define(&self, tag: &str, class: Rc<dyn ElementClass<E>>) -> Result<(), RegistryError> {
        if !tag.contains('-') {
            return Err(RegistryError::InvalidName(tag.to_string()));
        }

        let mut definitions = self.definitions.borrow_mut();
        if definitions.contains_key(tag) {
            return Err(RegistryError::DuplicateTag(tag.to_string()));
        }
        definitions.insert(tag.to_string(), class);
        tracing::debug!(tag, "custom element defined");
        Ok(())
    }

    /// Check if a tag is bound.
    pub fn is_defined(&self, tag: &str) -> bool {
        self.definitions.borrow().contains_key(tag)
    }

    /// Create one element instance for a tag occurrence in markup.
    ///
    /// Returns `None` for tags with no bound class.
    pub fn instantiate(&self, tag: &str) -> Option<Rc<dyn Element<E>>> {
        self.definitions
            .borrow()
            .get(tag)
            .map(|class| class.instantiate())
    }

    /// Number of bound tags.
    pub fn count(&self) -> usize {
        self.definitions.borrow().len()
    }
}

impl<E: HostElement> Default for ElementRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Element class generated by [`register`]: one program plus its options.
struct BridgeClass<P: Program> {
    tag: String,
    program: Rc<P>,
    options: Rc<BridgeOptions>,
}

impl<P, E> ElementClass<E> for BridgeClass<P>
where
    P: Program + 'static,
    E: HostElement<Mount = P::Mount> + 'static,
{
    fn instantiate(&self) -> Rc<dyn Element<E>> {
        Rc::new(BridgeElement::new(
            self.tag.clone(),
            self.program.clone(),
            self.options.clone(),
        ))
    }
}

/// Register a program as a custom element under `tag`.
///
/// Builds an element class that instantiates one [`BridgeElement`] per tag
/// occurrence and binds it in the registry. Registration failures (duplicate
/// tag, invalid name) are platform-level and propagate to the caller.
///
/// # Example
///
/// ```rust,ignore
/// let registry = ElementRegistry::new();
/// register(
///     &registry,
///     "my-widget",
///     WidgetProgram::new(),
///     BridgeOptions::new().static_flag("mode", json!("embedded")),
/// )?;
/// ```
pub fn register<P, E>(
    registry: &ElementRegistry<E>,
    tag: &str,
    program: P,
    options: BridgeOptions,
) -> Result<(), RegistryError>
where
    P: Program + 'static,
    E: HostElement<Mount = P::Mount> + 'static,
{
    let class = BridgeClass {
        tag: tag.to_string(),
        program: Rc::new(program),
        options: Rc::new(options),
    };
    registry.define(tag, Rc::new(class))
}
