use crate::catalog::{CreationPolicy, OptionCatalog};

/// Side effect run once per successful creation, with the new value
pub type CreateHook = Box<dyn FnMut(&str)>;

/// Notification emitted exactly once per commit, toggle, removal or creation
///
/// The value is what the host should store next; the widget keeps showing the
/// previous value until the host applies it. When the commit minted a new
/// option, `created` carries it and the catalog already contains it, so the
/// host sees catalog growth and selection in one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change<V> {
    pub value: V,
    pub created: Option<String>,
}

impl<V> Change<V> {
    pub fn selected(value: V) -> Self {
        Self {
            value,
            created: None,
        }
    }

    pub fn created(value: V, created: String) -> Self {
        Self {
            value,
            created: Some(created),
        }
    }
}

/// Append the trimmed query to the catalog if the policy allows it
///
/// Runs the creation hook before returning, so the hook always fires before
/// the host receives the matching `Change`.
pub(crate) fn mint(
    catalog: &mut OptionCatalog,
    policy: CreationPolicy,
    query: &str,
    selected: &[String],
    hook: Option<&mut CreateHook>,
) -> Option<String> {
    if !policy.can_create(catalog, query, selected) {
        return None;
    }

    let value = CreationPolicy::candidate(query)?.to_string();
    if !catalog.push(value.clone()) {
        return None;
    }

    log::info!("created option {:?} ({} options)", value, catalog.len());
    if let Some(hook) = hook {
        hook(&value);
    }
    Some(value)
}
