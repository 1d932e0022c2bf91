//! Maven POM rendering behind the `BuildWriter` seam.

use crate::build::BuildSpecification;
use crate::io::IndentingWriter;
use std::io::{self, Write};

/// Renders one build specification to its final textual form.
///
/// Invoked once per module with a sink that is scoped by the caller: opened
/// immediately before the call and released immediately after, on every exit
/// path. Implementations must emit identity, parent reference, child-module
/// list, bill-of-materials entries, and dependency edges in a deterministic
/// order.
pub trait BuildWriter {
    fn write_build(&self, out: &mut dyn Write, build: &BuildSpecification) -> io::Result<()>;
}

/// The stock `pom.xml` renderer.
///
/// Section order is fixed: coordinates, parent, packaging, modules,
/// dependencyManagement, dependencies. Containers iterate id-sorted, so the
/// output is byte-stable for a given specification.
#[derive(Debug, Clone, Copy, Default)]
pub struct MavenPomWriter;

impl BuildWriter for MavenPomWriter {
    fn write_build(&self, out: &mut dyn Write, build: &BuildSpecification) -> io::Result<()> {
        let mut writer = IndentingWriter::new(out);
        writer.println(r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writer.println(
            r#"<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#,
        )?;
        writer.println(
            r#"    xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">"#,
        )?;
        writer.indented(|w| {
            w.println("<modelVersion>4.0.0</modelVersion>")?;
            write_parent(w, build)?;
            write_coordinates(w, build)?;
            write_modules(w, build)?;
            write_boms(w, build)?;
            write_dependencies(w, build)
        })?;
        writer.println("</project>")
    }
}

fn write_parent(w: &mut IndentingWriter<'_>, build: &BuildSpecification) -> io::Result<()> {
    let Some(parent) = build.settings_ref().parent() else {
        return Ok(());
    };
    w.println("<parent>")?;
    w.indented(|w| {
        w.println(&tag("groupId", &parent.coordinates.group))?;
        w.println(&tag("artifactId", &parent.coordinates.artifact))?;
        w.println(&tag("version", &parent.coordinates.version))?;
        w.println(&tag("relativePath", &parent.relative_path))
    })?;
    w.println("</parent>")
}

fn write_coordinates(w: &mut IndentingWriter<'_>, build: &BuildSpecification) -> io::Result<()> {
    let settings = build.settings_ref();
    if !settings.group_id().is_empty() {
        w.println(&tag("groupId", settings.group_id()))?;
    }
    w.println(&tag("artifactId", settings.artifact_id()))?;
    w.println(&tag("version", settings.version_id()))?;
    if build.has_modules() {
        w.println(&tag("packaging", "pom"))?;
    }
    Ok(())
}

fn write_modules(w: &mut IndentingWriter<'_>, build: &BuildSpecification) -> io::Result<()> {
    if !build.has_modules() {
        return Ok(());
    }
    w.println("<modules>")?;
    w.indented(|w| {
        for module in build.modules() {
            w.println(&tag("module", module))?;
        }
        Ok(())
    })?;
    w.println("</modules>")
}

fn write_boms(w: &mut IndentingWriter<'_>, build: &BuildSpecification) -> io::Result<()> {
    if build.boms_ref().is_empty() {
        return Ok(());
    }
    w.println("<dependencyManagement>")?;
    w.indented(|w| {
        w.println("<dependencies>")?;
        w.indented(|w| {
            for (_, entry) in build.boms_ref().items() {
                w.println("<dependency>")?;
                w.indented(|w| {
                    w.println(&tag("groupId", &entry.group))?;
                    w.println(&tag("artifactId", &entry.artifact))?;
                    w.println(&tag("version", &entry.version))
                })?;
                w.println("</dependency>")?;
            }
            Ok(())
        })?;
        w.println("</dependencies>")
    })?;
    w.println("</dependencyManagement>")
}

fn write_dependencies(w: &mut IndentingWriter<'_>, build: &BuildSpecification) -> io::Result<()> {
    if build.dependencies_ref().is_empty() {
        return Ok(());
    }
    w.println("<dependencies>")?;
    w.indented(|w| {
        for (_, dependency) in build.dependencies_ref().items() {
            w.println("<dependency>")?;
            w.indented(|w| {
                w.println(&tag("groupId", &dependency.group))?;
                w.println(&tag("artifactId", &dependency.artifact))?;
                if let Some(version) = &dependency.version {
                    w.println(&tag("version", version))?;
                }
                Ok(())
            })?;
            w.println("</dependency>")?;
        }
        Ok(())
    })?;
    w.println("</dependencies>")
}

fn tag(name: &str, value: &str) -> String {
    format!("<{name}>{value}</{name}>")
}
