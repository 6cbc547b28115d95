use prankster::{InternFactory, PrankGenerator, Role};

fn main() {
    prankster::init_logging();

    let mut generator = PrankGenerator::new();

    for name in ["Alice", "Bob", "Charlie", "Dana"] {
        let role = Role::random();
        println!("[{role}] {name}: {}", generator.generate_prank(name, role));
    }

    // inject an extra factory; it now answers for employees
    generator.register_strategy_factory(InternFactory);
    println!(
        "[{}] Alice: {}",
        Role::Employee,
        generator.generate_prank("Alice", Role::Employee)
    );
}
