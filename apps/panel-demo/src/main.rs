use std::fmt;

use compose_panel::{
    define_compose, use_compose, use_compose_context, use_compose_registry, ComposeContext,
    ComposeError, ComposeOptions, LabelOptions, LocalScope,
};

#[derive(Debug, Clone)]
struct Customer {
    id: u32,
    name: &'static str,
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

fn describe<D: fmt::Display + Clone + 'static>(context: &ComposeContext<D>) {
    let data = context
        .data()
        .with(|data| data.as_ref().map_or_else(|| "-".to_string(), ToString::to_string));
    println!(
        "[{}] active={} title={:?} action={:?} data={}",
        context.name(),
        context.active().value(),
        context.title(),
        context.action(),
        data,
    );
}

fn single_panel() -> Result<(), ComposeError> {
    let page = LocalScope::root();
    let compose = use_compose::<Customer>(&page, ComposeOptions::default());

    let dialog = page.child();
    let view = use_compose_context::<Customer>(&dialog, "Customer", LabelOptions::default())?;
    describe(&view);

    compose.create(None);
    describe(&view);

    compose.edit(Some(Customer {
        id: 42,
        name: "Ada",
    }));
    describe(&view);

    compose.toggle();
    describe(&view);
    Ok(())
}

fn registry_panels() -> Result<(), ComposeError> {
    let page = LocalScope::root();
    let registry = use_compose_registry::<Customer>(
        &page,
        ComposeOptions {
            detach_on_close: false,
        },
    );

    let customers = define_compose::<Customer>(&page.child(), "Customer", LabelOptions::default())?;
    let notes = define_compose::<Customer>(
        &page.child(),
        "note",
        LabelOptions::default()
            .create_title("Add a %")
            .update_action("Update %"),
    )?;

    registry.edit(
        "Customer",
        Some(Customer {
            id: 7,
            name: "Grace",
        }),
    );
    registry.create("note", None);
    describe(&customers);
    describe(&notes);

    registry.close("Customer");
    registry.edit("note", None);
    describe(&customers);
    describe(&notes);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = single_panel().and_then(|_| registry_panels()) {
        log::error!("demo failed: {err}");
        std::process::exit(1);
    }

    let orphan = LocalScope::root();
    match use_compose_context::<Customer>(&orphan, "Orphan", LabelOptions::default()) {
        Ok(_) => log::error!("orphan consumer unexpectedly resolved an owner"),
        Err(err) => println!("expected failure: {err}"),
    }
}
