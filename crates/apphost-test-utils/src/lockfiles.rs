//! Minimal but realistic lockfile bodies.

/// pnpm lockfile v6 with top-level `dependencies`.
pub fn pnpm(entries: &[(&str, &str)]) -> String {
    let mut out = String::from("lockfileVersion: '6.0'\n\ndependencies:\n");
    for (name, version) in entries {
        out.push_str(&format!(
            "  {name}:\n    specifier: ^{}\n    version: {version}\n",
            version.split('(').next().unwrap_or_default()
        ));
    }
    out
}

/// Yarn classic (v1) lockfile.
pub fn yarn_classic(entries: &[(&str, &str, &str)]) -> String {
    let mut out = String::from(
        "# THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.\n# yarn lockfile v1\n",
    );
    for (name, spec, version) in entries {
        out.push_str(&format!(
            "\n\n{name}@{spec}:\n  version \"{version}\"\n  resolved \"https://registry.yarnpkg.com/{name}/-/{name}-{version}.tgz\"\n  integrity sha512-AAAA\n"
        ));
    }
    out
}

/// Yarn berry (v2+) lockfile.
pub fn yarn_berry(entries: &[(&str, &str, &str)]) -> String {
    let mut out = String::from(
        "# This file is generated by running \"yarn install\" inside your project.\n\n__metadata:\n  version: 8\n  cacheKey: 10c0\n",
    );
    for (name, spec, version) in entries {
        out.push_str(&format!(
            "\n\"{name}@npm:{spec}\":\n  version: {version}\n  resolution: \"{name}@npm:{version}\"\n  languageName: node\n  linkType: hard\n"
        ));
    }
    out
}

/// npm lockfile v3 (same schema for `npm-shrinkwrap.json`).
pub fn npm(entries: &[(&str, &str)]) -> String {
    let mut packages = serde_json::Map::new();
    packages.insert(
        String::new(),
        serde_json::json!({ "name": "test-app", "version": "0.1.0" }),
    );
    for (name, version) in entries {
        packages.insert(
            format!("node_modules/{name}"),
            serde_json::json!({ "version": version }),
        );
    }
    let lock = serde_json::json!({
        "name": "test-app",
        "version": "0.1.0",
        "lockfileVersion": 3,
        "requires": true,
        "packages": packages,
    });
    serde_json::to_string_pretty(&lock).unwrap()
}
