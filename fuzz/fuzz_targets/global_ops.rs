#![no_main]
use libfuzzer_sys::fuzz_target;
use xentity::sample::create_plan_document;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(doc) = create_plan_document("plano", "1.0", "UTF-8") {
            let root = doc.root_entity();
            let _ = root.global_print_xpath(s);
            let _ = root.global_rename_entity("componente", s);
            root.global_remove_entity(s);
            root.global_remove_attribute("componente", s);
            let _ = doc.pretty_print();
        }
    }
});
