//! The table linking config keywords to [`Properties`] fields.
//!
//! Each entry names the keyword as `ssh_config(5)` capitalizes it, the field
//! it fills, and how its raw values are shaped. The binder walks this table to
//! decode a block and the encoder walks it to render one, so the two always
//! agree on names and delimiters.

use crate::binder::DecodingContext;
use crate::encoder::Lines;
use crate::error::DecodeError;
use crate::properties::Properties;

/// How the raw values of a list property are split into elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `Ciphers aes128-ctr,aes256-ctr`
    Comma,
    /// `UserKnownHostsFile ~/.ssh/a ~/.ssh/b`
    Space,
    /// Every occurrence of the key adds one element.
    PerOccurrence,
}

impl Delimiter {
    /// The separator character, or `None` for per-occurrence lists.
    pub fn separator(&self) -> Option<char> {
        match self {
            Delimiter::Comma => Some(','),
            Delimiter::Space => Some(' '),
            Delimiter::PerOccurrence => None,
        }
    }
}

/// The value shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// One value; the last occurrence wins.
    Scalar,
    /// A scalar that also accepts the `none` keyword.
    Setting,
    List(Delimiter),
    /// `key=value` or `key value` pairs, one per occurrence.
    Map,
}

pub(crate) type BindFn = fn(&Field, &mut DecodingContext<'_>, &mut Properties) -> Result<(), DecodeError>;
pub(crate) type RenderFn = fn(&Field, &Properties, &mut Lines);

/// One recognized config keyword.
pub struct Field {
    /// Canonical capitalization, e.g. `AddKeysToAgent`.
    pub name: &'static str,
    pub kind: Kind,
    pub(crate) bind: BindFn,
    pub(crate) render: RenderFn,
}

impl Field {
    /// The delimiter of a list field.
    pub fn delimiter(&self) -> Option<Delimiter> {
        match self.kind {
            Kind::List(delimiter) => Some(delimiter),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

macro_rules! kind {
    (scalar) => {
        Kind::Scalar
    };
    (setting) => {
        Kind::Setting
    };
    (map) => {
        Kind::Map
    };
    (list $delimiter:ident) => {
        Kind::List(Delimiter::$delimiter)
    };
}

// The method named by `$kind` exists on both `DecodingContext` and `Lines`.
macro_rules! fields {
    ($($name:literal => $field:ident: $kind:ident $(($delimiter:ident))?),+ $(,)?) => {
        /// Every recognized keyword, sorted by lowercased name.
        pub static FIELDS: &[Field] = &[
            $(
                Field {
                    name: $name,
                    kind: kind!($kind $($delimiter)?),
                    bind: |field, context, properties| {
                        properties.$field = context.$kind(field)?;
                        Ok(())
                    },
                    render: |field, properties, lines| lines.$kind(field, &properties.$field),
                },
            )+
        ];
    };
}

fields! {
    "AddKeysToAgent" => add_keys_to_agent: scalar,
    "AddressFamily" => address_family: scalar,
    "BatchMode" => batch_mode: scalar,
    "BindAddress" => bind_address: scalar,
    "BindInterface" => bind_interface: scalar,
    "CanonicalDomains" => canonical_domains: list(Space),
    "CanonicalizeFallbackLocal" => canonicalize_fallback_local: scalar,
    "CanonicalizeHostname" => canonicalize_hostname: scalar,
    "CanonicalizeMaxDots" => canonicalize_max_dots: scalar,
    "CanonicalizePermittedCNAMEs" => canonicalize_permitted_cnames: list(Space),
    "CASignatureAlgorithms" => ca_signature_algorithms: list(Comma),
    "CertificateFile" => certificate_file: list(PerOccurrence),
    "ChallengeResponseAuthentication" => challenge_response_authentication: scalar,
    "CheckHostIP" => check_host_ip: scalar,
    "Ciphers" => ciphers: list(Comma),
    "ClearAllForwardings" => clear_all_forwardings: scalar,
    "Compression" => compression: scalar,
    "ConnectionAttempts" => connection_attempts: scalar,
    "ConnectTimeout" => connect_timeout: scalar,
    "ControlMaster" => control_master: scalar,
    "ControlPath" => control_path: setting,
    "ControlPersist" => control_persist: scalar,
    "DynamicForward" => dynamic_forward: scalar,
    "EnableSSHKeysign" => enable_ssh_keysign: scalar,
    "EscapeChar" => escape_char: setting,
    "ExitOnForwardFailure" => exit_on_forward_failure: scalar,
    "FingerprintHash" => fingerprint_hash: scalar,
    "ForwardAgent" => forward_agent: scalar,
    "ForwardX11" => forward_x11: scalar,
    "ForwardX11Timeout" => forward_x11_timeout: scalar,
    "ForwardX11Trusted" => forward_x11_trusted: scalar,
    "GatewayPorts" => gateway_ports: scalar,
    "GlobalKnownHostsFile" => global_known_hosts_file: list(Space),
    "GSSAPIAuthentication" => gssapi_authentication: scalar,
    "GSSAPIDelegateCredentials" => gssapi_delegate_credentials: scalar,
    "HashKnownHosts" => hash_known_hosts: scalar,
    "HostbasedAcceptedAlgorithms" => hostbased_accepted_algorithms: list(Comma),
    "HostbasedAuthentication" => hostbased_authentication: scalar,
    "HostKeyAlgorithms" => host_key_algorithms: list(Comma),
    "HostKeyAlias" => host_key_alias: scalar,
    "HostName" => host_name: scalar,
    "IdentitiesOnly" => identities_only: scalar,
    "IdentityAgent" => identity_agent: setting,
    "IdentityFile" => identity_file: list(PerOccurrence),
    "IgnoreUnknown" => ignore_unknown: list(Comma),
    "Include" => include: list(PerOccurrence),
    "IPQoS" => ipqos: scalar,
    "KbdInteractiveAuthentication" => kbd_interactive_authentication: scalar,
    "KbdInteractiveDevices" => kbd_interactive_devices: list(Comma),
    "KexAlgorithms" => kex_algorithms: list(Comma),
    "KnownHostsCommand" => known_hosts_command: scalar,
    "LocalCommand" => local_command: scalar,
    "LocalForward" => local_forward: list(PerOccurrence),
    "LogLevel" => log_level: scalar,
    "LogVerbose" => log_verbose: list(Comma),
    "MACs" => macs: list(Comma),
    "NoHostAuthenticationForLocalhost" => no_host_authentication_for_localhost: scalar,
    "NumberOfPasswordPrompts" => number_of_password_prompts: scalar,
    "PasswordAuthentication" => password_authentication: scalar,
    "PermitLocalCommand" => permit_local_command: scalar,
    "PermitRemoteOpen" => permit_remote_open: list(PerOccurrence),
    "PKCS11Provider" => pkcs11_provider: setting,
    "Port" => port: scalar,
    "PreferredAuthentications" => preferred_authentications: list(Comma),
    "ProxyCommand" => proxy_command: scalar,
    "ProxyJump" => proxy_jump: list(Comma),
    "ProxyUseFdpass" => proxy_use_fdpass: scalar,
    "PubkeyAcceptedAlgorithms" => pubkey_accepted_algorithms: list(PerOccurrence),
    "PubkeyAuthentication" => pubkey_authentication: scalar,
    "RekeyLimit" => rekey_limit: scalar,
    "RemoteCommand" => remote_command: scalar,
    "RemoteForward" => remote_forward: list(PerOccurrence),
    "RequestTTY" => request_tty: scalar,
    "RevokedHostKeys" => revoked_host_keys: list(Space),
    "SecurityKeyProvider" => security_key_provider: scalar,
    "SendEnv" => send_env: list(PerOccurrence),
    "ServerAliveCountMax" => server_alive_count_max: scalar,
    "ServerAliveInterval" => server_alive_interval: scalar,
    "SetEnv" => set_env: map,
    "StreamLocalBindMask" => stream_local_bind_mask: scalar,
    "StreamLocalBindUnlink" => stream_local_bind_unlink: scalar,
    "StrictHostKeyChecking" => strict_host_key_checking: scalar,
    "SyslogFacility" => syslog_facility: scalar,
    "TCPKeepAlive" => tcp_keep_alive: scalar,
    "Tunnel" => tunnel: scalar,
    "TunnelDevice" => tunnel_device: scalar,
    "UpdateHostKeys" => update_host_keys: scalar,
    "User" => user: scalar,
    "UserKnownHostsFile" => user_known_hosts_file: list(Space),
    "VerifyHostKeyDNS" => verify_host_key_dns: scalar,
    "VisualHostKey" => visual_host_key: scalar,
    "XAuthLocation" => xauth_location: scalar,
}

/// Look up a field by keyword, ignoring case.
pub fn field(name: &str) -> Option<&'static Field> {
    FIELDS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}
