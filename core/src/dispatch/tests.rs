use crate::config::{ApplicationConfig, DependencyDescriptor};
use crate::dispatch::{ActionController, ActionDispatcher, ActionTable, MvcEvent, NotFoundResult};
use crate::errors::DispatchError;
use crate::locator::ServiceMap;
use crate::routing::RouteMatch;
use crate::types::{service, ActionResult, ResolvedArguments};
use std::any::type_name;
use std::sync::Arc;

#[derive(Default)]
struct IndexController {
    calls: Vec<(String, usize)>,
}

impl IndexController {
    fn index_action(&mut self, args: ResolvedArguments) -> ActionResult {
        self.calls.push(("indexAction".to_string(), args.len()));
        Ok(service("someResponse".to_string()))
    }

    fn list_action(&mut self, args: ResolvedArguments) -> ActionResult {
        self.calls.push(("listAction".to_string(), args.len()));
        let dependency = args.get::<String>(0).cloned().unwrap_or_default();
        Ok(service(format!("R({})", dependency)))
    }

    fn fail_action(&mut self, _args: ResolvedArguments) -> ActionResult {
        self.calls.push(("failAction".to_string(), 0));
        Err("action failed".into())
    }
}

impl ActionController for IndexController {
    fn register_actions(actions: &mut ActionTable<Self>) {
        actions
            .action("index", Self::index_action)
            .action("list", Self::list_action)
            .action("fail", Self::fail_action);
    }
}

/// Controller overriding the fallback with its own not-found handler.
#[derive(Default)]
struct CustomNotFoundController {
    not_found_args: Option<usize>,
}

impl ActionController for CustomNotFoundController {
    fn register_actions(_actions: &mut ActionTable<Self>) {}

    fn not_found_action(&mut self, args: ResolvedArguments) -> ActionResult {
        self.not_found_args = Some(args.len());
        Ok(service(args.get::<u32>(0).copied().unwrap_or(404)))
    }
}

fn controller_id() -> &'static str {
    type_name::<IndexController>()
}

fn event_for(action: &str) -> MvcEvent {
    MvcEvent::with_route_match(RouteMatch::new("application").with_param("action", action))
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_index_without_injections_invoked_with_no_args() {
    init_logger();
    let locator = ServiceMap::with_config(ApplicationConfig::new());
    let mut dispatcher = ActionDispatcher::new(IndexController::default());
    let mut event = event_for("index");

    let result = dispatcher.on_dispatch(&mut event, &locator).unwrap();

    assert_eq!(result.downcast_ref::<String>(), Some(&"someResponse".to_string()));
    assert!(Arc::ptr_eq(&result, event.result().unwrap()));
    assert_eq!(dispatcher.controller().calls, vec![("indexAction".to_string(), 0)]);
}

#[test]
fn test_list_with_named_dependency() {
    init_logger();
    let config = ApplicationConfig::new().with_injection(controller_id(), "listAction", ["dep.key"]);
    let locator = ServiceMap::with_config(config).with("dep.key", "X".to_string());
    let mut dispatcher = ActionDispatcher::new(IndexController::default());
    let mut event = event_for("list");

    let result = dispatcher.on_dispatch(&mut event, &locator).unwrap();

    assert_eq!(result.downcast_ref::<String>(), Some(&"R(X)".to_string()));
    assert_eq!(
        event.result().unwrap().downcast_ref::<String>(),
        Some(&"R(X)".to_string())
    );
    assert_eq!(dispatcher.controller().calls, vec![("listAction".to_string(), 1)]);
}

#[test]
fn test_list_with_unresolvable_dependency() {
    init_logger();
    let config = ApplicationConfig::new().with_injection(controller_id(), "listAction", ["bad.key"]);
    let locator = ServiceMap::with_config(config);
    let mut dispatcher = ActionDispatcher::new(IndexController::default());
    let mut event = event_for("list");

    let err = dispatcher.on_dispatch(&mut event, &locator).unwrap_err();

    match &err {
        DispatchError::DependencyNotResolved { source } => {
            assert_eq!(source.key(), "bad.key");
            assert!(err.to_string().contains(source.message()));
        }
        other => panic!("Expected DependencyNotResolved, got {:?}", other),
    }
    assert!(err
        .to_string()
        .starts_with("Controller action dependency not resolved: "));
    assert!(dispatcher.controller().calls.is_empty());
    assert!(event.result().is_none());
}

#[test]
fn test_missing_route_match() {
    let locator = ServiceMap::with_config(ApplicationConfig::new());
    let mut dispatcher = ActionDispatcher::new(IndexController::default());
    let mut event = MvcEvent::new();

    let err = dispatcher.on_dispatch(&mut event, &locator).unwrap_err();

    assert!(matches!(err, DispatchError::MissingRoute));
    assert!(event.result().is_none());
    assert!(dispatcher.controller().calls.is_empty());
}

#[test]
fn test_unknown_action_falls_back_to_not_found() {
    let locator = ServiceMap::with_config(ApplicationConfig::new());
    let mut dispatcher = ActionDispatcher::new(IndexController::default());
    let mut event = event_for("delete");

    let result = dispatcher.on_dispatch(&mut event, &locator).unwrap();

    assert_eq!(
        result.downcast_ref::<NotFoundResult>(),
        Some(&NotFoundResult::default())
    );
    assert!(event.result().is_some());
}

#[test]
fn test_missing_action_param_defaults_to_not_found() {
    let locator = ServiceMap::with_config(ApplicationConfig::new());
    let mut dispatcher = ActionDispatcher::new(CustomNotFoundController::default());
    let mut event = MvcEvent::with_route_match(RouteMatch::new("application"));

    dispatcher.on_dispatch(&mut event, &locator).unwrap();

    assert_eq!(dispatcher.controller().not_found_args, Some(0));
}

#[test]
fn test_fallback_uses_its_own_declarations() {
    let controller = type_name::<CustomNotFoundController>();
    let config = ApplicationConfig::new()
        .with_injection(controller, "deleteAction", ["never.resolved"])
        .with_injection(controller, "notFoundAction", ["status"]);
    let locator = ServiceMap::with_config(config).with("status", 410u32);
    let mut dispatcher = ActionDispatcher::new(CustomNotFoundController::default());
    let mut event = event_for("delete");

    let result = dispatcher.on_dispatch(&mut event, &locator).unwrap();

    assert_eq!(result.downcast_ref::<u32>(), Some(&410));
    assert_eq!(dispatcher.controller().not_found_args, Some(1));
}

#[test]
fn test_requested_name_selects_aliased_declarations() {
    let config = ApplicationConfig::new()
        .with_injection(controller_id(), "listAction", ["by.type"])
        .with_injection("Application\\Controller\\Album", "listAction", ["by.alias"]);
    let locator = ServiceMap::with_config(config)
        .with("by.type", "type".to_string())
        .with("by.alias", "alias".to_string());
    let mut dispatcher = ActionDispatcher::new(IndexController::default())
        .with_requested_name("Application\\Controller\\Album");
    let mut event = event_for("list");

    let result = dispatcher.on_dispatch(&mut event, &locator).unwrap();

    assert_eq!(dispatcher.controller_identifier(), "Application\\Controller\\Album");
    assert_eq!(result.downcast_ref::<String>(), Some(&"R(alias)".to_string()));
}

#[test]
fn test_controller_identifier_defaults_to_type_name() {
    let dispatcher = ActionDispatcher::new(IndexController::default());
    assert_eq!(dispatcher.controller_identifier(), controller_id());
}

#[test]
fn test_inline_factory_receives_controller() {
    let config = ApplicationConfig::new().with_injection(
        controller_id(),
        "listAction",
        vec![DependencyDescriptor::factory(|locator, controller| {
            let calls = controller
                .downcast_ref::<IndexController>()
                .map(|c| c.calls.len())
                .ok_or("controller type mismatch")?;
            Ok(service(format!("calls={} has_config={}", calls, locator.has("config"))))
        })],
    );
    let locator = ServiceMap::with_config(config);
    let mut dispatcher = ActionDispatcher::new(IndexController::default());
    let mut event = event_for("list");

    let result = dispatcher.on_dispatch(&mut event, &locator).unwrap();

    assert_eq!(
        result.downcast_ref::<String>(),
        Some(&"R(calls=0 has_config=true)".to_string())
    );
}

#[test]
fn test_action_error_sets_no_result() {
    let locator = ServiceMap::with_config(ApplicationConfig::new());
    let mut dispatcher = ActionDispatcher::new(IndexController::default());
    let mut event = event_for("fail");

    let err = dispatcher.on_dispatch(&mut event, &locator).unwrap_err();

    assert!(matches!(err, DispatchError::Action(_)));
    assert_eq!(err.to_string(), "action failed");
    assert!(event.result().is_none());
}

#[test]
fn test_target_selection() {
    let dispatcher = ActionDispatcher::new(IndexController::default());

    assert_eq!(dispatcher.target("list").0, "listAction");
    assert_eq!(dispatcher.target("LIST").0, "notFoundAction");
    assert_eq!(dispatcher.target("not-found").0, "notFoundAction");
    assert!(dispatcher.actions().contains("notFoundAction"));
}
