use idlens_engine::RenderOptions;

const BANNER: &str = r#"
 ___ ____  _     _____ _   _ ____
|_ _|  _ \| |   | ____| \ | / ___|
 | || | | | |   |  _| |  \| \___ \
 | || |_| | |___| |___| |\  |___) |
|___|____/|_____|_____|_| \_|____/
"#;

pub fn print_banner(opts: &RenderOptions) {
    println!("{}", opts.accent(BANNER));
    println!("{}", opts.dim("              Identity Lookup Console"));
}
