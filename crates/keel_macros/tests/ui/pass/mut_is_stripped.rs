//! A `mut` modifier on a field is accepted and discarded; the record still
//! has no setters and private fields.

keel_macros::readonly_record! {
    pub struct Counter {
        mut count: u64 = 0,
        label: String,
    }
}

fn main() {
    let c = Counter::builder().count(9).build();
    assert_eq!(*c.count(), 9);
    // No declared default: falls back to Default::default().
    assert_eq!(c.label(), "");
}
