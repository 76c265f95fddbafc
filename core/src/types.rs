//! Typed arguments for Cachet operations.
//!
//! # Design
//! Required fields are plain method arguments on `CachetClient`; everything
//! optional lives in one of the records below. Each record enumerates the
//! fields the API documents and carries an `extra` map for anything it does
//! not, so new server fields can be sent without a client release. Every
//! record converts into `Params`, with unset fields recorded as absent.

use std::collections::BTreeMap;

use crate::params::{ParamValue, Params, SortOrder};

/// Identifier of any Cachet resource.
pub type Id = u32;

/// Caller-supplied fields passed through verbatim.
pub type Extra = BTreeMap<String, ParamValue>;

/// Component status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStatus {
    Operational = 1,
    PerformanceIssues = 2,
    PartialOutage = 3,
    MajorOutage = 4,
}

impl From<ComponentStatus> for ParamValue {
    fn from(status: ComponentStatus) -> Self {
        ParamValue::Int(status as i64)
    }
}

/// Incident status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentStatus {
    Scheduled = 0,
    Investigating = 1,
    Identified = 2,
    Watching = 3,
    Fixed = 4,
}

impl From<IncidentStatus> for ParamValue {
    fn from(status: IncidentStatus) -> Self {
        ParamValue::Int(status as i64)
    }
}

/// Filters for `search_components`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentSearch {
    pub id: Option<Id>,
    pub name: Option<String>,
    pub status: Option<ComponentStatus>,
    pub group_id: Option<Id>,
    pub enabled: Option<bool>,
    pub sort: Option<String>,
    /// Sent as `desc` when unset.
    pub order: Option<SortOrder>,
    pub per_page: Option<u32>,
    pub extra: Extra,
}

impl From<ComponentSearch> for Params {
    fn from(search: ComponentSearch) -> Self {
        let mut params = Params::new()
            .with_opt("id", search.id)
            .with_opt("name", search.name)
            .with_opt("status", search.status)
            .with_opt("group_id", search.group_id)
            .with_opt("enabled", search.enabled)
            .with_opt("sort", search.sort)
            .with("order", search.order.unwrap_or_default())
            .with_opt("per_page", search.per_page);
        params.extend(search.extra);
        params
    }
}

/// Optional fields for `create_component`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentOptions {
    pub description: Option<String>,
    pub link: Option<String>,
    pub order: Option<i32>,
    pub group_id: Option<Id>,
    pub enabled: Option<bool>,
    pub extra: Extra,
}

impl From<ComponentOptions> for Params {
    fn from(options: ComponentOptions) -> Self {
        let mut params = Params::new()
            .with_opt("description", options.description)
            .with_opt("link", options.link)
            .with_opt("order", options.order)
            .with_opt("group_id", options.group_id)
            .with_opt("enabled", options.enabled);
        params.extend(options.extra);
        params
    }
}

/// Fields for `update_component`. All optional; the server decides what is
/// required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentUpdate {
    pub name: Option<String>,
    pub status: Option<ComponentStatus>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub order: Option<i32>,
    pub group_id: Option<Id>,
    pub enabled: Option<bool>,
    pub extra: Extra,
}

impl From<ComponentUpdate> for Params {
    fn from(update: ComponentUpdate) -> Self {
        let mut params = Params::new()
            .with_opt("name", update.name)
            .with_opt("status", update.status)
            .with_opt("description", update.description)
            .with_opt("link", update.link)
            .with_opt("order", update.order)
            .with_opt("group_id", update.group_id)
            .with_opt("enabled", update.enabled);
        params.extend(update.extra);
        params
    }
}

/// Filters for `search_component_groups`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentGroupSearch {
    pub id: Option<Id>,
    pub name: Option<String>,
    pub collapsed: Option<u8>,
    pub visible: Option<bool>,
    pub sort: Option<String>,
    /// Sent as `desc` when unset.
    pub order: Option<SortOrder>,
    pub per_page: Option<u32>,
    pub extra: Extra,
}

impl From<ComponentGroupSearch> for Params {
    fn from(search: ComponentGroupSearch) -> Self {
        let mut params = Params::new()
            .with_opt("id", search.id)
            .with_opt("name", search.name)
            .with_opt("collapsed", search.collapsed)
            .with_opt("visible", search.visible)
            .with_opt("sort", search.sort)
            .with("order", search.order.unwrap_or_default())
            .with_opt("per_page", search.per_page);
        params.extend(search.extra);
        params
    }
}

/// Optional fields for `create_component_group`.
///
/// `collapsed`: 0 never, 1 always, 2 unless every component is operational.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentGroupOptions {
    pub order: Option<i32>,
    pub collapsed: Option<u8>,
    pub visible: Option<bool>,
    pub extra: Extra,
}

impl From<ComponentGroupOptions> for Params {
    fn from(options: ComponentGroupOptions) -> Self {
        let mut params = Params::new()
            .with_opt("order", options.order)
            .with_opt("collapsed", options.collapsed)
            .with_opt("visible", options.visible);
        params.extend(options.extra);
        params
    }
}

/// Fields for `update_component_group`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentGroupUpdate {
    pub name: Option<String>,
    pub order: Option<i32>,
    pub collapsed: Option<u8>,
    pub visible: Option<bool>,
    pub extra: Extra,
}

impl From<ComponentGroupUpdate> for Params {
    fn from(update: ComponentGroupUpdate) -> Self {
        let mut params = Params::new()
            .with_opt("name", update.name)
            .with_opt("order", update.order)
            .with_opt("collapsed", update.collapsed)
            .with_opt("visible", update.visible);
        params.extend(update.extra);
        params
    }
}

/// Filters for `search_incidents`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentSearch {
    pub id: Option<Id>,
    pub component_id: Option<Id>,
    pub name: Option<String>,
    pub status: Option<IncidentStatus>,
    pub visible: Option<bool>,
    pub sort: Option<String>,
    /// Sent as `desc` when unset.
    pub order: Option<SortOrder>,
    pub per_page: Option<u32>,
    pub extra: Extra,
}

impl From<IncidentSearch> for Params {
    fn from(search: IncidentSearch) -> Self {
        let mut params = Params::new()
            .with_opt("id", search.id)
            .with_opt("component_id", search.component_id)
            .with_opt("name", search.name)
            .with_opt("status", search.status)
            .with_opt("visible", search.visible)
            .with_opt("sort", search.sort)
            .with("order", search.order.unwrap_or_default())
            .with_opt("per_page", search.per_page);
        params.extend(search.extra);
        params
    }
}

/// Optional fields for `create_incident`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentOptions {
    pub component_id: Option<Id>,
    /// New status of `component_id`, applied together with the incident.
    pub component_status: Option<ComponentStatus>,
    pub notify: Option<bool>,
    pub template: Option<String>,
    pub extra: Extra,
}

impl From<IncidentOptions> for Params {
    fn from(options: IncidentOptions) -> Self {
        let mut params = Params::new()
            .with_opt("component_id", options.component_id)
            .with_opt("component_status", options.component_status)
            .with_opt("notify", options.notify)
            .with_opt("template", options.template);
        params.extend(options.extra);
        params
    }
}

/// Fields for `update_incident`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentUpdate {
    pub name: Option<String>,
    pub message: Option<String>,
    pub status: Option<IncidentStatus>,
    pub visible: Option<bool>,
    pub component_id: Option<Id>,
    pub component_status: Option<ComponentStatus>,
    pub notify: Option<bool>,
    pub extra: Extra,
}

impl From<IncidentUpdate> for Params {
    fn from(update: IncidentUpdate) -> Self {
        let mut params = Params::new()
            .with_opt("name", update.name)
            .with_opt("message", update.message)
            .with_opt("status", update.status)
            .with_opt("visible", update.visible)
            .with_opt("component_id", update.component_id)
            .with_opt("component_status", update.component_status)
            .with_opt("notify", update.notify);
        params.extend(update.extra);
        params
    }
}

/// Optional fields for `create_metric`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricOptions {
    pub display_chart: Option<bool>,
    /// 0 sums points, 1 averages them.
    pub calc_type: Option<u8>,
    pub places: Option<u8>,
    pub default_view: Option<u8>,
    pub threshold: Option<u32>,
    pub order: Option<i32>,
    pub extra: Extra,
}

impl From<MetricOptions> for Params {
    fn from(options: MetricOptions) -> Self {
        let mut params = Params::new()
            .with_opt("display_chart", options.display_chart)
            .with_opt("calc_type", options.calc_type)
            .with_opt("places", options.places)
            .with_opt("default_view", options.default_view)
            .with_opt("threshold", options.threshold)
            .with_opt("order", options.order);
        params.extend(options.extra);
        params
    }
}

/// Fields for `update_metric`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricUpdate {
    pub name: Option<String>,
    pub suffix: Option<String>,
    pub description: Option<String>,
    pub default_value: Option<f64>,
    pub display_chart: Option<bool>,
    pub calc_type: Option<u8>,
    pub places: Option<u8>,
    pub default_view: Option<u8>,
    pub threshold: Option<u32>,
    pub order: Option<i32>,
    pub extra: Extra,
}

impl From<MetricUpdate> for Params {
    fn from(update: MetricUpdate) -> Self {
        let mut params = Params::new()
            .with_opt("name", update.name)
            .with_opt("suffix", update.suffix)
            .with_opt("description", update.description)
            .with_opt("default_value", update.default_value)
            .with_opt("display_chart", update.display_chart)
            .with_opt("calc_type", update.calc_type)
            .with_opt("places", update.places)
            .with_opt("default_view", update.default_view)
            .with_opt("threshold", update.threshold)
            .with_opt("order", update.order);
        params.extend(update.extra);
        params
    }
}

/// Optional fields for `create_metric_point`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricPointOptions {
    /// Unix timestamp of the point; the server uses "now" when unset.
    pub timestamp: Option<i64>,
    pub extra: Extra,
}

impl From<MetricPointOptions> for Params {
    fn from(options: MetricPointOptions) -> Self {
        let mut params = Params::new().with_opt("timestamp", options.timestamp);
        params.extend(options.extra);
        params
    }
}

/// Optional fields for `create_subscriber`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriberOptions {
    /// Skip the confirmation email and mark the subscriber verified.
    pub verify: Option<bool>,
    pub extra: Extra,
}

impl From<SubscriberOptions> for Params {
    fn from(options: SubscriberOptions) -> Self {
        let mut params = Params::new().with_opt("verify", options.verify);
        params.extend(options.extra);
        params
    }
}
