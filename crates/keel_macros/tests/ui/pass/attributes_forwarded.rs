//! Outer attributes and field attributes are forwarded unchanged.

keel_macros::readonly_record! {
    /// Connection settings.
    #[derive(Debug, Clone)]
    pub struct Settings {
        host: String = String::from("localhost"),
        #[allow(clippy::struct_field_names)]
        port_name: String = String::from("default"),
        retries: u32 = 3,
    }
}

fn main() {
    let s = Settings::builder().retries(5).build();
    assert_eq!(s.host(), "localhost");
    assert_eq!(s.port_name(), "default");
    assert_eq!(*s.retries(), 5);

    // Forwarded derive: Debug and Clone are available.
    let copy = s.clone();
    let _ = format!("{copy:?}");
}
