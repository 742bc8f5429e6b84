//! The object capability produced by resource factories

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use sealed::AsAny;
use serde::Serialize;
use std::any::{Any, TypeId};
use std::fmt::Debug;
use std::sync::Arc;

mod sealed {
    use std::any::Any;

    pub trait AsAny: Any {
        fn as_any(&self) -> &dyn Any;

        fn as_any_mut(&mut self) -> &mut dyn Any;
    }

    impl<T: Any> AsAny for T {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }
}

/// A serializable value a resource factory can hand out.
///
/// Implemented for every `Serialize + Debug + Send + Sync + 'static` type, so
/// `k8s-openapi` structs, `DynamicObject` and plain user types all qualify.
/// `Box<dyn Object>` is not `Serialize` and therefore never an `Object`
/// itself; type queries on a boxed object always reach the boxed value.
pub trait Object: AsAny + Debug + Send + Sync {}

impl<T: Any + Serialize + Debug + Send + Sync> Object for T {}

impl dyn Object {
    /// Borrow the concrete value if it is a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow the concrete value if it is a `T`
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// `TypeId` of the concrete value
    pub fn type_id(&self) -> TypeId {
        self.as_any().type_id()
    }
}

/// Zero-argument constructor for an empty object or list
pub type ObjectFactory = Arc<dyn Fn() -> Box<dyn Object> + Send + Sync>;

/// List wrapper handed out by list factories
#[derive(Debug, Clone, Serialize)]
pub struct ResourceList<K> {
    pub metadata: ListMeta,
    pub items: Vec<K>,
}

impl<K> Default for ResourceList<K> {
    fn default() -> Self {
        Self {
            metadata: ListMeta::default(),
            items: Vec::new(),
        }
    }
}

/// Factory producing `K::default()` on every call
pub fn object_factory<K: Object + Default>() -> ObjectFactory {
    Arc::new(|| Box::new(K::default()) as Box<dyn Object>)
}

/// Factory producing an empty `ResourceList<K>` on every call
pub fn list_factory<K: Object + Serialize>() -> ObjectFactory {
    Arc::new(|| Box::new(ResourceList::<K>::default()) as Box<dyn Object>)
}
