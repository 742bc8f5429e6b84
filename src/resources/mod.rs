//! Resource descriptors and the identity types they hand out

pub mod identity;
pub mod info;
pub mod object;
pub mod registry;

pub use identity::{GroupResource, GroupVersion, GroupVersionResource, TypeMeta};
pub use info::ResourceInfo;
pub use object::{list_factory, object_factory, Object, ObjectFactory, ResourceList};
pub use registry::{RegisteredResource, ResourceRegistry, RESOURCE_REGISTRY};
