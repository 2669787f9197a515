use crate::config::ObjectStoreConfig;
use crate::errors::Result;
use crate::object_store::ObjectStore;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

pub type ObjectStoreConstructor =
    Arc<dyn Fn(&ObjectStoreConfig) -> Result<Box<dyn ObjectStore>> + Send + Sync>;

static OBJECT_STORE_REGISTRY: Lazy<RwLock<HashMap<String, ObjectStoreConstructor>>> =
    Lazy::new(|| {
        let mut registry: HashMap<String, ObjectStoreConstructor> = HashMap::new();
        registry.insert("local".to_string(), Arc::new(super::local::construct));
        RwLock::new(registry)
    });

pub fn register_object_store_plugin<S: Into<String>>(name: S, constructor: ObjectStoreConstructor) {
    let name = name.into();
    let mut registry = OBJECT_STORE_REGISTRY
        .write()
        .expect("Object store registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_object_store_plugin(name: &str) -> Option<ObjectStoreConstructor> {
    OBJECT_STORE_REGISTRY
        .read()
        .expect("Object store registry lock poisoned")
        .get(name)
        .cloned()
}

pub fn debug_object_store_registry() {
    let registry = OBJECT_STORE_REGISTRY
        .read()
        .expect("Object store registry lock poisoned");
    tracing::debug!("Registered object store plugins:");
    for key in registry.keys() {
        tracing::debug!(" - {}", key);
    }
}
