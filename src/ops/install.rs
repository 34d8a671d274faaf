//! Install planning and command synthesis.

use std::path::Path;

use semver::Version;

use crate::core::command::Command;
use crate::core::config::SITE_HOST_NAME;
use crate::core::options::InstallOptions;
use crate::core::topology::Topology;
use crate::ops::errors::PlanError;
use crate::ops::validate::validate_properties;

/// Root directory the artifact is installed under.
pub const INSTALL_ROOT: &str = "/opt/shipyard";

/// Service unit controlled by launch and wait steps.
pub const SERVICE_NAME: &str = "shipyard";

/// Ordered step summaries for an install of the given topology.
///
/// Step counts depend only on topology. Index `i` here corresponds exactly
/// to the command produced by [`install_command`] for step `i`.
pub fn install_steps(topology: Topology) -> Vec<String> {
    let mut steps = vec![
        "Unpack artifact resources".to_string(),
        "Configure system prerequisites".to_string(),
        "Install provisioning services".to_string(),
    ];

    if topology == Topology::Multi {
        steps.push("Distribute provisioning agents to worker nodes".to_string());
        steps.push("Register worker agents with the site node".to_string());
    }

    steps.extend([
        "Configure provisioning manifests".to_string(),
        "Launch provisioning run".to_string(),
        "Wait for services to boot".to_string(),
        "Verify the installation".to_string(),
    ]);

    steps
}

/// Reject topology/OS combinations that cannot work at all.
///
/// Clustered installs need the systemd-era service manager that arrived
/// with OS major 7; Single runs on every tested major.
pub fn check_platform(topology: Topology, os_version: &str) -> Result<(), PlanError> {
    if topology == Topology::Multi && os_version != "7" {
        return Err(PlanError::UnsupportedPlatform {
            topology,
            os_version: os_version.to_string(),
        });
    }
    Ok(())
}

/// Build the command for one install step.
///
/// Checks run in a fixed order: step range, configuration, platform
/// support, then synthesis. `previous` is the version being replaced when
/// the caller knows one exists; it is surfaced to the command environment
/// so provisioning scripts can branch on fresh-versus-reinstall.
pub fn install_command(
    previous: Option<&Version>,
    target: &Path,
    opts: &InstallOptions,
) -> Result<Command, PlanError> {
    let steps = install_steps(opts.topology);
    if opts.step >= steps.len() {
        return Err(PlanError::OutOfInstallRange { step: opts.step });
    }

    validate_properties(opts.topology, &opts.properties)?;
    check_platform(opts.topology, &opts.os_version)?;

    let mut command = synthesize(opts.topology, opts.step, &opts.os_version, target, opts)
        .describe(steps[opts.step].clone());

    if let Some(previous) = previous {
        command = command.env("STEVEDORE_PREVIOUS_VERSION", previous.to_string());
    }

    tracing::debug!(
        topology = %opts.topology,
        step = opts.step,
        os_version = %opts.os_version,
        "built install command"
    );

    Ok(command)
}

fn synthesize(
    topology: Topology,
    step: usize,
    os_version: &str,
    target: &Path,
    opts: &InstallOptions,
) -> Command {
    match topology {
        Topology::Single => single_step(step, os_version, target),
        Topology::Multi => multi_step(step, target, opts),
    }
}

fn single_step(step: usize, os_version: &str, target: &Path) -> Command {
    match step {
        0 => Command::shell(format!(
            "sudo mkdir -p {root} && sudo tar -xzf {target} -C {root}",
            root = INSTALL_ROOT,
            target = target.display()
        )),
        1 => Command::shell(
            "sudo setenforce 0 || true; \
             sudo sed -i 's/^SELINUX=enforcing/SELINUX=permissive/' /etc/selinux/config",
        ),
        2 => match os_version {
            "6" => Command::shell("sudo yum -y -q install puppet-3.4.3"),
            _ => Command::shell("sudo yum -y -q install puppet"),
        },
        3 => Command::shell(format!(
            "sudo cp -r {root}/manifests /etc/puppet/manifests",
            root = INSTALL_ROOT
        )),
        4 => service_control("start", os_version),
        5 => wait_for_boot(),
        6 => Command::shell(format!(
            "test -d {root} && {probe}",
            root = INSTALL_ROOT,
            probe = health_probe("localhost")
        )),
        _ => unreachable!("step index validated against install_steps"),
    }
}

fn multi_step(step: usize, target: &Path, opts: &InstallOptions) -> Command {
    // Range and configuration checks have already passed, so the site host
    // is present and non-empty here.
    let site_host = opts
        .properties
        .get(SITE_HOST_NAME)
        .map(String::as_str)
        .unwrap_or_default();

    match step {
        0 => Command::shell(format!(
            "sudo mkdir -p {root} && sudo tar -xzf {target} -C {root}",
            root = INSTALL_ROOT,
            target = target.display()
        )),
        1 => Command::shell(
            "sudo setenforce 0 || true; \
             sudo sed -i 's/^SELINUX=enforcing/SELINUX=permissive/' /etc/selinux/config",
        ),
        2 => Command::shell("sudo yum -y -q install puppet puppet-server"),
        3 => Command::shell(format!(
            "{root}/bin/distribute-agents --site-node {host}",
            root = INSTALL_ROOT,
            host = site_host
        )),
        4 => Command::shell(format!(
            "{root}/bin/register-agents --site-node {host}",
            root = INSTALL_ROOT,
            host = site_host
        ))
        .env("SITE_HOST_NAME", site_host),
        5 => Command::shell(format!(
            "sudo cp -r {root}/manifests /etc/puppet/manifests",
            root = INSTALL_ROOT
        )),
        6 => Command::shell(format!("sudo systemctl start {}.service", SERVICE_NAME)),
        7 => wait_for_boot(),
        8 => Command::shell(health_probe(site_host)),
        _ => unreachable!("step index validated against install_steps"),
    }
}

/// Service-manager invocation for the artifact service, split by OS major.
pub(crate) fn service_control(action: &str, os_version: &str) -> Command {
    match os_version {
        "6" => Command::shell(format!("sudo service {} {}", SERVICE_NAME, action)),
        _ => Command::shell(format!(
            "sudo systemctl {} {}.service",
            action, SERVICE_NAME
        )),
    }
}

/// Poll the artifact's API until it answers or the attempt budget runs out.
fn wait_for_boot() -> Command {
    Command::shell(format!(
        "for i in $(seq 1 60); do {} && exit 0; sleep 5; done; exit 1",
        health_probe("localhost")
    ))
}

fn health_probe(host: &str) -> String {
    format!("curl -sf http://{}/api/ >/dev/null", host)
}
