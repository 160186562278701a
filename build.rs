use std::fs;

fn main() {
    // Validate the built-in page template at compile time
    let template_path = "src/default_template.html";
    println!("cargo:rerun-if-changed={}", template_path);

    let content = fs::read_to_string(template_path).expect("Failed to read default_template.html");

    for placeholder in ["{{ Title }}", "{{ Content }}"] {
        if !content.contains(placeholder) {
            panic!("default_template.html is missing the {} placeholder", placeholder);
        }
    }
}
