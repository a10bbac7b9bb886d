use {
    swutool::{
        Args,
        utils::*,
        chipscan,
        inspect
    },
    clap::Parser,
    std::{fs, path::Path, process},
    colored::Colorize,
};

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        //usage errors exit with 1, not clap's usual 2
        process::exit(1)
    });

    if !Path::new(&args.filename).is_file() {
        println!("{} File not found: {}", "[!]".red(), args.filename);
        process::exit(1);
    }

    let size = fs::metadata(&args.filename)
        .unwrap_or_else(|e| panic!("Cannot stat image, error: {e}"))
        .len();
    let head = read_head(&args.filename, HEAD_LEN)
        .unwrap_or_else(|e| panic!("Cannot read image, error: {e}"));

    println!("{} Inspecting: {}", "[+]".green(), args.filename);
    println!("    Size: {size} bytes");

    if inspect::is_error_page(&head) {
        println!("\n{} This .swu appears to be an XML error page, not firmware.", "[!]".red());
        println!("    The beginning of the file looks like:");
        println!("    {:?}", first_line(&head, ERROR_SNIPPET_LEN));
        println!("    This usually means the OSS bucket returned AccessDenied; \
                  you'll need to capture the *real* OTA payload (e.g. from the app).");
        return;
    }

    println!("\n{} Container guess: {}", "[+]".green(), inspect::detect(&head));

    //first few bytes for manual inspection
    println!("\n{} First 64 bytes (hex):", "[+]".green());
    println!("    {}", hex_dump(&head[..head.len().min(DUMP_LEN)]));

    chipscan::scan(&args.filename, SCAN_LIMIT);

    println!("\n{} Next steps (manual):", "[+]".green());
    println!("    - If this looks like gzip/zip/tar, try decompression manually.");
    println!("    - For unknown containers, run binwalk/strings on the file and");
    println!("      look for partitions or separate images (JL vs Allwinner).");
}
