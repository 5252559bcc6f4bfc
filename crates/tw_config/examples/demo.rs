use tw_config::TailwindConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let config = TailwindConfig::svelte_preset();
	config.validate()?;

	println!("{}", serde_json::to_string_pretty(&config)?);

	for path in ["src/app.html", "src/routes/+page.svelte", "src/lib/utils/helpers.ts"] {
		let scanned = config.content.iter().any(|glob| glob.matches(path));
		println!("{:<30} scanned: {}", path, scanned);
	}

	Ok(())
}
