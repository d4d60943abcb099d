//! The typed property record of one `Host` block.
//!
//! Every field is independently optional: `None` means the block doesn't set
//! it. [`Properties::defaults`] holds what the OpenSSH client assumes when no
//! block sets a field, and is the base every resolution starts from.

use crate::value::{
    AddKeysToAgent, AddressFamily, CanonicalizeHostname, ControlMaster, ControlPersist,
    FingerprintHash, ForwardAgent, Forwarding, IdentityAgent, IpQos, LogLevel,
    PreferredAuthentication, RekeyLimit, RequestTty, Setting, StrictHostKeyChecking,
    SyslogFacility, TimeFormat, Tunnel, TunnelDevice, YesAskNo, YesNo,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Typed ssh client properties.
///
/// Field names follow `ssh_config(5)` in snake case. The matching config
/// keyword and list delimiter of each field live in [`crate::schema`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Properties {
    pub add_keys_to_agent: Option<AddKeysToAgent>,
    pub address_family: Option<AddressFamily>,
    pub batch_mode: Option<YesNo>,
    pub bind_address: Option<String>,
    pub bind_interface: Option<String>,
    pub canonical_domains: Option<Vec<String>>,
    pub canonicalize_fallback_local: Option<YesNo>,
    pub canonicalize_hostname: Option<CanonicalizeHostname>,
    pub canonicalize_max_dots: Option<u8>,
    pub canonicalize_permitted_cnames: Option<Vec<String>>,
    pub ca_signature_algorithms: Option<Vec<String>>,
    pub certificate_file: Option<Vec<String>>,
    pub challenge_response_authentication: Option<YesNo>,
    pub check_host_ip: Option<YesNo>,
    pub ciphers: Option<Vec<String>>,
    pub clear_all_forwardings: Option<YesNo>,
    pub compression: Option<YesNo>,
    pub connection_attempts: Option<u32>,
    /// Seconds.
    pub connect_timeout: Option<u32>,
    pub control_master: Option<ControlMaster>,
    pub control_path: Setting<String>,
    pub control_persist: Option<ControlPersist>,
    pub dynamic_forward: Option<String>,
    pub enable_ssh_keysign: Option<YesNo>,
    pub escape_char: Setting<String>,
    pub exit_on_forward_failure: Option<YesNo>,
    pub fingerprint_hash: Option<FingerprintHash>,
    pub forward_agent: Option<ForwardAgent>,
    pub forward_x11: Option<YesNo>,
    pub forward_x11_timeout: Option<TimeFormat>,
    pub forward_x11_trusted: Option<YesNo>,
    pub gateway_ports: Option<YesNo>,
    pub global_known_hosts_file: Option<Vec<String>>,
    pub gssapi_authentication: Option<YesNo>,
    pub gssapi_delegate_credentials: Option<YesNo>,
    pub hash_known_hosts: Option<YesNo>,
    pub hostbased_accepted_algorithms: Option<Vec<String>>,
    pub hostbased_authentication: Option<YesNo>,
    pub host_key_algorithms: Option<Vec<String>>,
    pub host_key_alias: Option<String>,
    pub host_name: Option<String>,
    pub identities_only: Option<YesNo>,
    pub identity_agent: Setting<IdentityAgent>,
    pub identity_file: Option<Vec<String>>,
    pub ignore_unknown: Option<Vec<String>>,
    pub include: Option<Vec<String>>,
    pub ipqos: Option<IpQos>,
    pub kbd_interactive_authentication: Option<YesNo>,
    pub kbd_interactive_devices: Option<Vec<String>>,
    pub kex_algorithms: Option<Vec<String>>,
    pub known_hosts_command: Option<String>,
    pub local_command: Option<String>,
    pub local_forward: Option<Vec<Forwarding>>,
    pub log_level: Option<LogLevel>,
    pub log_verbose: Option<Vec<String>>,
    pub macs: Option<Vec<String>>,
    pub no_host_authentication_for_localhost: Option<YesNo>,
    pub number_of_password_prompts: Option<u8>,
    pub password_authentication: Option<YesNo>,
    pub permit_local_command: Option<YesNo>,
    pub permit_remote_open: Option<Vec<String>>,
    pub pkcs11_provider: Setting<String>,
    pub port: Option<u16>,
    pub preferred_authentications: Option<Vec<PreferredAuthentication>>,
    pub proxy_command: Option<String>,
    pub proxy_jump: Option<Vec<String>>,
    pub proxy_use_fdpass: Option<YesNo>,
    pub pubkey_accepted_algorithms: Option<Vec<String>>,
    pub pubkey_authentication: Option<YesNo>,
    pub rekey_limit: Option<RekeyLimit>,
    pub remote_command: Option<String>,
    pub remote_forward: Option<Vec<Forwarding>>,
    pub request_tty: Option<RequestTty>,
    pub revoked_host_keys: Option<Vec<String>>,
    pub security_key_provider: Option<String>,
    pub send_env: Option<Vec<String>>,
    pub server_alive_count_max: Option<u16>,
    /// Seconds; `0` disables keepalive messages.
    pub server_alive_interval: Option<u16>,
    pub set_env: Option<BTreeMap<String, String>>,
    pub stream_local_bind_mask: Option<u32>,
    pub stream_local_bind_unlink: Option<YesNo>,
    pub strict_host_key_checking: Option<StrictHostKeyChecking>,
    pub syslog_facility: Option<SyslogFacility>,
    pub tcp_keep_alive: Option<YesNo>,
    pub tunnel: Option<Tunnel>,
    pub tunnel_device: Option<TunnelDevice>,
    pub update_host_keys: Option<YesAskNo>,
    pub user: Option<String>,
    pub user_known_hosts_file: Option<Vec<String>>,
    pub verify_host_key_dns: Option<YesAskNo>,
    pub visual_host_key: Option<YesNo>,
    pub xauth_location: Option<String>,

    /// Keys no field recognizes, in their first-seen spelling, with every
    /// raw value in file order. `None` when there are none.
    pub unparsed: Option<BTreeMap<String, Vec<String>>>,
}

static DEFAULTS: Lazy<Properties> = Lazy::new(openssh_defaults);

impl Properties {
    /// An empty record with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The OpenSSH client defaults, built once per process.
    pub fn defaults() -> &'static Properties {
        &DEFAULTS
    }
}

fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|s| s.to_string()).collect())
}

const HOST_KEY_ALGORITHMS: &[&str] = &[
    "ssh-ed25519-cert-v01@openssh.com",
    "ecdsa-sha2-nistp256-cert-v01@openssh.com",
    "ecdsa-sha2-nistp384-cert-v01@openssh.com",
    "ecdsa-sha2-nistp521-cert-v01@openssh.com",
    "sk-ssh-ed25519-cert-v01@openssh.com",
    "sk-ecdsa-sha2-nistp256-cert-v01@openssh.com",
    "rsa-sha2-512-cert-v01@openssh.com",
    "rsa-sha2-256-cert-v01@openssh.com",
    "ssh-rsa-cert-v01@openssh.com",
    "ssh-ed25519",
    "ecdsa-sha2-nistp256",
    "ecdsa-sha2-nistp384",
    "ecdsa-sha2-nistp521",
    "sk-ssh-ed25519@openssh.com",
    "sk-ecdsa-sha2-nistp256@openssh.com",
    "rsa-sha2-512",
    "rsa-sha2-256",
    "ssh-rsa",
];

fn openssh_defaults() -> Properties {
    use crate::value::PreferredAuthentication as Auth;

    Properties {
        add_keys_to_agent: Some(AddKeysToAgent::No),
        address_family: Some(AddressFamily::Any),
        batch_mode: Some(YesNo::No),
        canonicalize_fallback_local: Some(YesNo::Yes),
        canonicalize_hostname: Some(CanonicalizeHostname::No),
        canonicalize_max_dots: Some(1),
        ca_signature_algorithms: strings(&[
            "ssh-ed25519",
            "ecdsa-sha2-nistp256",
            "ecdsa-sha2-nistp384",
            "ecdsa-sha2-nistp521",
            "sk-ssh-ed25519@openssh.com",
            "sk-ecdsa-sha2-nistp256@openssh.com",
            "rsa-sha2-512",
            "rsa-sha2-256",
        ]),
        challenge_response_authentication: Some(YesNo::Yes),
        check_host_ip: Some(YesNo::No),
        ciphers: strings(&[
            "chacha20-poly1305@openssh.com",
            "aes128-ctr",
            "aes192-ctr",
            "aes256-ctr",
            "aes128-gcm@openssh.com",
            "aes256-gcm@openssh.com",
        ]),
        clear_all_forwardings: Some(YesNo::No),
        compression: Some(YesNo::No),
        connection_attempts: Some(1),
        control_master: Some(ControlMaster::No),
        control_persist: Some(ControlPersist::No),
        enable_ssh_keysign: Some(YesNo::No),
        escape_char: Setting::Value("~".to_string()),
        exit_on_forward_failure: Some(YesNo::No),
        fingerprint_hash: Some(FingerprintHash::Sha256),
        forward_agent: Some(ForwardAgent::No),
        forward_x11: Some(YesNo::No),
        forward_x11_timeout: Some(TimeFormat::minutes(20)),
        forward_x11_trusted: Some(YesNo::No),
        gateway_ports: Some(YesNo::No),
        global_known_hosts_file: strings(&["~/.ssh/known_hosts"]),
        gssapi_authentication: Some(YesNo::No),
        gssapi_delegate_credentials: Some(YesNo::No),
        hash_known_hosts: Some(YesNo::No),
        hostbased_accepted_algorithms: strings(HOST_KEY_ALGORITHMS),
        hostbased_authentication: Some(YesNo::No),
        host_key_algorithms: strings(HOST_KEY_ALGORITHMS),
        identities_only: Some(YesNo::No),
        identity_file: strings(&[
            "~/.ssh/id_dsa",
            "~/.ssh/id_ecdsa",
            "~/.ssh/id_ecdsa_sk",
            "~/.ssh/id_ed25519",
            "~/.ssh/id_ed25519_sk",
            "~/.ssh/id_rsa",
        ]),
        ipqos: Some(IpQos::default()),
        kbd_interactive_authentication: Some(YesNo::No),
        kex_algorithms: strings(&[
            "curve25519-sha256",
            "curve25519-sha256@libssh.org",
            "ecdh-sha2-nistp256",
            "ecdh-sha2-nistp384",
            "ecdh-sha2-nistp521",
            "diffie-hellman-group-exchange-sha256",
            "diffie-hellman-group16-sha512",
            "diffie-hellman-group18-sha512",
            "diffie-hellman-group14-sha256",
        ]),
        log_level: Some(LogLevel::Info),
        macs: strings(&[
            "umac-64-etm@openssh.com",
            "umac-128-etm@openssh.com",
            "hmac-sha2-256-etm@openssh.com",
            "hmac-sha2-512-etm@openssh.com",
            "hmac-sha1-etm@openssh.com",
            "umac-64@openssh.com",
            "umac-128@openssh.com",
            "hmac-sha2-256",
            "hmac-sha2-512",
            "hmac-sha1",
        ]),
        no_host_authentication_for_localhost: Some(YesNo::No),
        number_of_password_prompts: Some(3),
        password_authentication: Some(YesNo::Yes),
        permit_local_command: Some(YesNo::No),
        port: Some(22),
        preferred_authentications: Some(vec![
            Auth::GssapiWithMic,
            Auth::Hostbased,
            Auth::Publickey,
            Auth::KeyboardInteractive,
            Auth::Password,
        ]),
        proxy_use_fdpass: Some(YesNo::No),
        pubkey_accepted_algorithms: strings(HOST_KEY_ALGORITHMS),
        pubkey_authentication: Some(YesNo::Yes),
        rekey_limit: Some(RekeyLimit::default()),
        send_env: Some(Vec::new()),
        server_alive_count_max: Some(3),
        server_alive_interval: Some(0),
        set_env: Some(BTreeMap::new()),
        stream_local_bind_mask: Some(0o177),
        stream_local_bind_unlink: Some(YesNo::No),
        strict_host_key_checking: Some(StrictHostKeyChecking::Ask),
        syslog_facility: Some(SyslogFacility::User),
        tcp_keep_alive: Some(YesNo::Yes),
        tunnel: Some(Tunnel::No),
        tunnel_device: Some(TunnelDevice::default()),
        update_host_keys: Some(YesAskNo::Yes),
        user_known_hosts_file: strings(&["~/.ssh/known_hosts", "~/.ssh/known_hosts2"]),
        verify_host_key_dns: Some(YesAskNo::No),
        visual_host_key: Some(YesNo::No),
        ..Properties::default()
    }
}
