//! # Plan Command Implementation
//!
//! This module implements the `plan` subcommand, which prints the complete
//! compilation and test plan of the project.
//!
//! ## Functionality
//!
//! - **Compilation chains**: every main and test unit with its source and
//!   output directories, the JDK it is compiled with and its javac flags.
//! - **Test runs**: every test execution, the JDK it runs on, whether it
//!   would run or be skipped, and the flattened test classes it sees.
//! - **Formats**: a tree for people (`text`), `json` or `yaml` for tools that
//!   drive the actual build.
//!
//! This command is a safe, read-only operation that does not modify any files.

use std::borrow::Cow;
use std::io;

use anyhow::Result;
use clap::Args;
use ptree::TreeItem;

use multirelease::graph::{CompilationUnit, TargetGraph};
use multirelease::matrix::TestUnit;
use multirelease::output::{self, emoji, Format, OutputConfig};
use multirelease::suggestions;
use multirelease::toolchain::SelectedToolchain;

use crate::cli::Context;

/// Print the compilation and test plan
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Execute the `plan` command.
pub fn execute(args: PlanArgs, context: &Context) -> Result<()> {
    let project = context.project.load(&context.environment)?;
    let running = context.project.running_version(&context.environment)?;
    let graph = project.plan(running).map_err(suggestions::explain)?;

    match output::render(&graph, args.format)? {
        Some(rendered) => print!("{}", ensure_newline(rendered)),
        None => print!("{}", render_tree(&plan_tree(&graph, &context.output))?),
    }
    Ok(())
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Render a tree into a string.
fn render_tree(tree: &TreeNode) -> Result<String> {
    let mut buffer = Vec::new();
    ptree::write_tree(tree, &mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to render plan: {}", e))?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn plan_tree(graph: &TargetGraph, out: &OutputConfig) -> TreeNode {
    let policy = if graph.is_strict() { "strict" } else { "lenient" };
    let label = format!(
        "{} {} base Java {}, {} toolchains, running Java {}",
        emoji(out, "📦", "[PLAN]"),
        out.heading("Plan:"),
        graph.base(),
        policy,
        graph.running()
    );

    let layers = graph
        .layered_releases()
        .iter()
        .map(|release| format!("META-INF/versions/{}", release))
        .collect::<Vec<_>>();
    let layers = if layers.is_empty() {
        "jar layers: none".to_string()
    } else {
        format!("jar layers: {}", layers.join(", "))
    };

    TreeNode::new(
        label,
        vec![
            TreeNode::leaf(layers),
            TreeNode::new(
                out.heading("main chain"),
                graph.main_units().iter().map(|u| unit_node(u, out)).collect(),
            ),
            TreeNode::new(
                out.heading("test chain"),
                graph.test_units().iter().map(|u| unit_node(u, out)).collect(),
            ),
            TreeNode::new(
                out.heading("test runs"),
                graph
                    .test_matrix()
                    .iter()
                    .map(|t| test_node(t, graph, out))
                    .collect(),
            ),
        ],
    )
}

fn unit_node(unit: &CompilationUnit, out: &OutputConfig) -> TreeNode {
    let mut details = vec![
        TreeNode::leaf(format!("sources: {}", unit.source_dir.display())),
        TreeNode::leaf(format!("output: {}", unit.output_dir.display())),
        TreeNode::leaf(format!("javac {}", unit.options.args.join(" "))),
    ];
    if let Some(dependency) = &unit.depends_on {
        details.push(TreeNode::leaf(out.dim(&format!("compiles against {}", dependency))));
    }

    TreeNode::new(
        format!(
            "{}: Java {} with {}",
            unit.name,
            unit.release,
            describe_toolchain(&unit.toolchain)
        ),
        details,
    )
}

fn test_node(test: &TestUnit, graph: &TargetGraph, out: &OutputConfig) -> TreeNode {
    let (marker, note) = if test.should_run() {
        (emoji(out, "▶️", "[RUN]"), String::new())
    } else {
        (
            emoji(out, "⏭️", "[SKIP]"),
            out.dim(&format!(" (covered by running Java {})", graph.running())),
        )
    };

    let classes = test
        .test_classes
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let mut details = vec![TreeNode::leaf(format!("test classes: {}", classes))];
    if !test.jvm_args.is_empty() {
        details.push(TreeNode::leaf(format!("jvm args: {}", test.jvm_args.join(" "))));
    }

    TreeNode::new(
        format!(
            "{} {}: Java {} on {}{}",
            marker,
            test.name,
            test.release,
            describe_toolchain(&test.toolchain),
            note
        ),
        details,
    )
}

fn describe_toolchain(toolchain: &SelectedToolchain) -> String {
    match &toolchain.home {
        Some(home) => format!("JDK {} ({})", toolchain.version, home.display()),
        None => format!("running JDK {}", toolchain.version),
    }
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(label: String, children: Vec<TreeNode>) -> Self {
        Self { label, children }
    }

    fn leaf(label: String) -> Self {
        Self::new(label, Vec::new())
    }
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: io::Write>(&self, f: &mut W, _style: &ptree::Style) -> io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}
