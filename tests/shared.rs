use prankster::{BuiltinFactory, InternFactory, PrankGenerator, Role, SharedPrankGenerator};
use std::thread;

#[test]
fn readers_see_registration_from_another_thread() {
    let shared = SharedPrankGenerator::from(PrankGenerator::new());

    let writer = shared.clone();
    thread::spawn(move || writer.register_strategy_factory(InternFactory))
        .join()
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let g = shared.clone();
            thread::spawn(move || g.generate_prank(&format!("worker-{i}"), Role::Employee))
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(
            h.join().unwrap(),
            format!("Hey worker-{i}, the CEO wants you to get coffee for the entire department!")
        );
    }
}

#[test]
fn unregister_through_shared_handle() {
    let shared = SharedPrankGenerator::new(PrankGenerator::with_default("nope"));
    assert!(shared.unregister_strategy_factory::<BuiltinFactory>());
    assert_eq!(shared.generate_prank("a", Role::Manager), "nope");
}
