//! Grouping of components into class clusters.

use std::collections::HashMap;

use archview_core::Component;

/// Components sharing one class, in world order.
#[derive(Debug)]
pub struct ClassCluster<'w> {
    pub class: &'w str,
    pub components: Vec<&'w Component>,
}

/// Group components by class.
///
/// Clusters appear in the order their class is first seen; components keep
/// their relative world order inside each cluster.
pub fn group_by_class(components: &[Component]) -> Vec<ClassCluster<'_>> {
    let mut clusters: Vec<ClassCluster<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for component in components {
        let slot = *index.entry(component.class.as_str()).or_insert_with(|| {
            clusters.push(ClassCluster {
                class: component.class.as_str(),
                components: Vec::new(),
            });
            clusters.len() - 1
        });
        clusters[slot].components.push(component);
    }

    clusters
}
