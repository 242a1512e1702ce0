// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CRD YAML Generator
//!
//! Generates Kubernetes CRD YAML files from Rust types defined in src/crd.rs.
//! The YAML files in deploy/crds/ are rendered from these types, never edited by hand.
//!
//! Usage:
//!   cargo run --bin crdgen
//!
//! Generated files will be written to deploy/crds/ with proper headers.

use std::fs;
use std::path::Path;

use anyhow::Result;
use cloudfront_controller::crd::{
    CachePolicy, Distribution, Function, OriginRequestPolicy, ResponseHeadersPolicy, VpcOrigin,
};
use kube::CustomResourceExt;

const COPYRIGHT_HEADER: &str = "# Copyright (c) 2025 Erick Bourgeois, firestoned
# SPDX-License-Identifier: MIT
#
# This file is AUTO-GENERATED from src/crd.rs
# DO NOT EDIT MANUALLY - Run `cargo run --bin crdgen` to regenerate
#
";

fn main() -> Result<()> {
    let output_dir = Path::new("deploy/crds");

    fs::create_dir_all(output_dir)?;

    println!("Generating CRD YAML files from src/crd.rs...");

    generate_crd::<Distribution>("distributions.crd.yaml", output_dir)?;
    generate_crd::<CachePolicy>("cachepolicies.crd.yaml", output_dir)?;
    generate_crd::<OriginRequestPolicy>("originrequestpolicies.crd.yaml", output_dir)?;
    generate_crd::<ResponseHeadersPolicy>("responseheaderspolicies.crd.yaml", output_dir)?;
    generate_crd::<VpcOrigin>("vpcorigins.crd.yaml", output_dir)?;
    generate_crd::<Function>("functions.crd.yaml", output_dir)?;

    println!("✓ Successfully generated CRD YAML files in deploy/crds/");
    println!("\nNext steps:");
    println!("  1. Review the generated files");
    println!("  2. Deploy with: kubectl apply -f deploy/crds/");

    Ok(())
}

fn generate_crd<T>(filename: &str, output_dir: &Path) -> Result<()>
where
    T: CustomResourceExt,
{
    let yaml = serde_yaml::to_string(&T::crd())?;
    let content = format!("{COPYRIGHT_HEADER}{yaml}");

    let output_path = output_dir.join(filename);
    fs::write(&output_path, content)?;

    println!("  ✓ Generated {filename}");

    Ok(())
}
