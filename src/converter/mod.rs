//! Resolve-phase driver.
//!
//! The converter visits every declaration of a finished project once and
//! hands it to each registered [`ResolveListener`], highest priority first.
//!
//! ```ignore
//! use tydoc::converter::Converter;
//! use tydoc::resolve::ResolveOptions;
//!
//! let mut converter = Converter::with_defaults(ResolveOptions::default());
//! let report = converter.resolve(&mut project);
//! ```

use tracing::{debug, info, info_span};

use crate::base::{ProjectId, ReflectionId};
use crate::models::ProjectReflection;
use crate::resolve::{ImplementsPlugin, ResolutionReport, ResolveOptions};

/// State handed to listeners while a project is being resolved.
pub struct Context<'a> {
    pub project: &'a mut ProjectReflection,
    pub report: &'a mut ResolutionReport,
}

impl<'a> Context<'a> {
    pub fn new(project: &'a mut ProjectReflection, report: &'a mut ResolutionReport) -> Self {
        Self { project, report }
    }

    /// The project new references belong to.
    pub fn project_id(&self) -> ProjectId {
        self.project.id()
    }
}

/// A component reacting to each declaration during the resolve phase.
pub trait ResolveListener {
    fn name(&self) -> &str;

    /// Listeners with higher priority run first for each declaration.
    fn priority(&self) -> i32 {
        0
    }

    /// Called once before the first declaration is visited.
    fn on_begin(&mut self, _ctx: &mut Context<'_>) {}

    fn on_resolve(&mut self, ctx: &mut Context<'_>, reflection: ReflectionId);

    /// Called once after the last declaration is visited.
    fn on_end(&mut self, _ctx: &mut Context<'_>) {}
}

/// Runs the resolve phase over a project.
#[derive(Default)]
pub struct Converter {
    listeners: Vec<Box<dyn ResolveListener>>,
}

impl Converter {
    /// Create a converter with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the implements plugin registered.
    pub fn with_defaults(options: ResolveOptions) -> Self {
        let mut converter = Self::new();
        converter.add_listener(Box::new(ImplementsPlugin::new(options)));
        converter
    }

    /// Register a listener. Listeners of equal priority keep registration order.
    pub fn add_listener(&mut self, listener: Box<dyn ResolveListener>) {
        let priority = listener.priority();
        let position = self
            .listeners
            .iter()
            .position(|l| l.priority() < priority)
            .unwrap_or(self.listeners.len());
        self.listeners.insert(position, listener);
    }

    /// Listener names in the order they run.
    pub fn listener_names(&self) -> Vec<&str> {
        self.listeners.iter().map(|l| l.name()).collect()
    }

    /// Visit every declaration of `project` once.
    pub fn resolve(&mut self, project: &mut ProjectReflection) -> ResolutionReport {
        let _span = info_span!("resolve", project = project.name()).entered();
        let mut report = ResolutionReport::new();
        let declarations = project.declarations();
        debug!(count = declarations.len(), "resolving declarations");

        {
            let mut ctx = Context::new(project, &mut report);
            for listener in &mut self.listeners {
                listener.on_begin(&mut ctx);
            }
            for reflection in declarations {
                for listener in &mut self.listeners {
                    listener.on_resolve(&mut ctx, reflection);
                }
            }
            for listener in &mut self.listeners {
                listener.on_end(&mut ctx);
            }
        }

        info!(
            links = report.links().len(),
            warnings = report.warning_count(),
            "resolve finished"
        );
        report
    }
}

/// Run the implements plugin over `project`.
pub fn resolve_project(project: &mut ProjectReflection, options: ResolveOptions) -> ResolutionReport {
    Converter::with_defaults(options).resolve(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReflectionKind;

    struct Recorder {
        name: &'static str,
        priority: i32,
        seen: std::rc::Rc<std::cell::RefCell<Vec<(&'static str, ReflectionId)>>>,
    }

    impl ResolveListener for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn on_resolve(&mut self, _ctx: &mut Context<'_>, reflection: ReflectionId) {
            self.seen.borrow_mut().push((self.name, reflection));
        }
    }

    #[test]
    fn test_listeners_run_by_priority() {
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut converter = Converter::new();
        for (name, priority) in [("late", -10), ("early", 10), ("default", 0), ("default2", 0)] {
            converter.add_listener(Box::new(Recorder {
                name,
                priority,
                seen: seen.clone(),
            }));
        }
        assert_eq!(converter.listener_names(), vec!["early", "default", "default2", "late"]);

        let mut project = ProjectReflection::new("test");
        let a = project.add_declaration("A", ReflectionKind::Class);
        converter.resolve(&mut project);

        assert_eq!(
            *seen.borrow(),
            vec![("early", a), ("default", a), ("default2", a), ("late", a)]
        );
    }

    #[test]
    fn test_every_declaration_visited_once() {
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut converter = Converter::new();
        converter.add_listener(Box::new(Recorder {
            name: "r",
            priority: 0,
            seen: seen.clone(),
        }));

        let mut project = ProjectReflection::new("test");
        let class = project.add_declaration("C", ReflectionKind::Class);
        let method = project.add_child(class, "f", ReflectionKind::Method).unwrap();
        let sig = project.add_signature(method, ReflectionKind::CallSignature).unwrap();
        project.add_parameter(sig, "x", None).unwrap();
        converter.resolve(&mut project);

        let visited: Vec<_> = seen.borrow().iter().map(|&(_, id)| id).collect();
        assert_eq!(visited, vec![class, method]);
    }

    #[derive(Default)]
    struct Phases {
        events: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
    }

    impl ResolveListener for Phases {
        fn name(&self) -> &str {
            "phases"
        }

        fn on_begin(&mut self, _ctx: &mut Context<'_>) {
            self.events.borrow_mut().push("begin".into());
        }

        fn on_resolve(&mut self, _ctx: &mut Context<'_>, reflection: ReflectionId) {
            self.events.borrow_mut().push(reflection.to_string());
        }

        fn on_end(&mut self, _ctx: &mut Context<'_>) {
            self.events.borrow_mut().push("end".into());
        }
    }

    #[test]
    fn test_begin_and_end_wrap_the_run() {
        let phases = Phases::default();
        let events = phases.events.clone();
        let mut converter = Converter::new();
        converter.add_listener(Box::new(phases));

        let mut project = ProjectReflection::new("test");
        project.add_declaration("A", ReflectionKind::Class);
        project.add_declaration("B", ReflectionKind::Class);
        converter.resolve(&mut project);

        assert_eq!(*events.borrow(), vec!["begin", "#0", "#1", "end"]);
    }
}
