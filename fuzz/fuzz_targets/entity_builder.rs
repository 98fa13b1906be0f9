#![no_main]
use libfuzzer_sys::fuzz_target;
use xentity::Entity;

// Each line is `name key=value ...`; a leading `+` nests under the previous entity.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(root) = Entity::new("root") {
            let mut current = root.clone();
            for line in s.lines() {
                let (nested, line) = match line.strip_prefix('+') {
                    Some(rest) => (true, rest),
                    None => (false, line),
                };
                let mut parts = line.split(' ');
                let Some(name) = parts.next() else { continue };
                let Ok(entity) = Entity::new(name) else { continue };
                for pair in parts {
                    match pair.split_once('=') {
                        Some((key, value)) => entity.add_attribute(key, value),
                        None => entity.add_text(pair),
                    }
                }
                let parent = if nested { &current } else { &root };
                if parent.add_child_entity(&entity).is_ok() {
                    current = entity;
                }
            }
            let _ = root.pretty_print(0);
        }
    }
});
