use auction::{Item, ItemRegistry};
use std::sync::Arc;

fn main() {
    auction::logging::init();

    let registry = Arc::new(ItemRegistry::new());

    let workers: Vec<_> = ["sword", "shield", "helmet"]
        .into_iter()
        .map(|name| {
            let registry = registry.clone();
            std::thread::spawn(move || registry.add(Item::new(name)))
        })
        .collect();
    for w in workers {
        let _ = w.join();
    }

    match registry.find("sword") {
        Some(item) => println!("found: {:?}", item),
        None => println!("sword not registered"),
    }
    println!("shovel: {:?}", registry.find("shovel"));
    println!("registry holds {:?}", registry.names());
}
