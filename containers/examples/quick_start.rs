use containers::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = builtin_registry::<i32>();

    for name in registry.names() {
        let Some(mut c) = registry.create(name) else {
            continue;
        };
        for v in [5, 1, 3, 5] {
            c.add(v);
        }
        let next = *c.peek()?;
        let drained = drain_to_vec(&mut *c)?;
        println!("{:<15} {:<10} peek={} drained={:?}", name, c.order(), next, drained);
    }

    let mut source: Stack<i32> = (1..=5).collect();
    let mut target = Queue::new();
    let moved = transfer_elements(&mut source, &mut target, 3)?;
    println!("moved {} -> {:?}", moved, drain_to_vec(&mut target)?);

    Ok(())
}
