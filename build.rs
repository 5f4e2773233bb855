fn main() {
    println!("cargo:rerun-if-env-changed=DOORBELL_CONFIG");

    // Only the firmware build needs the ESP-IDF environment; host builds
    // (tests, simulation) skip it.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
