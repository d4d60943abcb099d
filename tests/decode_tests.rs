//! Field-by-field decoding tests.
//!
//! Each case decodes a single-property host and checks how the property is
//! rendered back, which exercises the keyword lookup, the value grammar and
//! the canonical spelling in one go.

use rstest::rstest;
use sshconf::value::{ForwardAgent, IpQos, IpQosClass, Quality, TimeFormat, YesNo};
use sshconf::{Config, DecodeError, ParseError, SshconfError};

fn decode(lines: &str) -> Result<Config, SshconfError> {
    Config::parse(&format!("Host x\n  {}\n", lines))
}

fn rendered(lines: &str) -> String {
    let config = decode(lines).unwrap();
    config
        .to_string()
        .strip_prefix("Host x\n  ")
        .unwrap()
        .to_string()
}

// =============================================================================
// SCALARS
// =============================================================================

#[rstest]
#[case::add_keys_to_agent("ADDKEYSTOAGENT=confirm", "AddKeysToAgent confirm")]
#[case::add_keys_to_agent_interval("AddKeysToAgent 1h", "AddKeysToAgent 1h")]
#[case::address_family("addressFamily inet6", "AddressFamily inet6")]
#[case::batch_mode("batchMode yes", "BatchMode yes")]
#[case::bind_address("bindaddress 127.0.0.1", "BindAddress 127.0.0.1")]
#[case::bind_interface("bindInterface eth0", "BindInterface eth0")]
#[case::canonicalize_hostname("canonicalizeHostname=always", "CanonicalizeHostname always")]
#[case::canonicalize_max_dots_hex("canonicalizeMaxDots 0x2", "CanonicalizeMaxDots 2")]
#[case::compression_boolean("CoMpRESsION true", "Compression yes")]
#[case::connect_timeout("connectTimeout 17", "ConnectTimeout 17")]
#[case::control_master("controlMaster autoask", "ControlMaster autoask")]
#[case::control_persist("ControlPersist 10m", "ControlPersist 10m")]
#[case::dynamic_forward("DynamicForward localhost:1080", "DynamicForward localhost:1080")]
#[case::fingerprint_hash("FingerprintHash md5", "FingerprintHash md5")]
#[case::forward_agent_variable("ForwardAgent $SSH_AUTH_SOCK", "ForwardAgent $SSH_AUTH_SOCK")]
#[case::forward_x11_timeout("ForwardX11Timeout 90", "ForwardX11Timeout 90s")]
#[case::host_key_alias_empty("HostKeyAlias \"\"", "HostKeyAlias \"\"")]
#[case::host_name("HostName 10.0.0.5", "HostName 10.0.0.5")]
#[case::ipqos_single("IPQoS lowdelay", "IPQoS lowdelay cs1")]
#[case::ipqos_numeric("IPQoS 0x10 none", "IPQoS 16 none")]
#[case::log_level("LogLevel DEBUG3", "LogLevel DEBUG3")]
#[case::number_of_password_prompts_binary("NumberOfPasswordPrompts 0b11", "NumberOfPasswordPrompts 3")]
#[case::port_hex("Port 0x1f90", "Port 8080")]
#[case::proxy_command("ProxyCommand ssh -W %h:%p bastion", "ProxyCommand ssh -W %h:%p bastion")]
#[case::rekey_limit("RekeyLimit 3M 10m", "RekeyLimit 3M 10m")]
#[case::rekey_limit_no_timeout("RekeyLimit 1G", "RekeyLimit 1G none")]
#[case::request_tty("RequestTTY force", "RequestTTY force")]
#[case::server_alive_interval("ServerAliveInterval 60", "ServerAliveInterval 60")]
#[case::stream_local_bind_mask_octal("StreamLocalBindMask 0177", "StreamLocalBindMask 127")]
#[case::strict_host_key_checking("StrictHostKeyChecking accept-new", "StrictHostKeyChecking accept-new")]
#[case::syslog_facility("SyslogFacility LOCAL3", "SyslogFacility LOCAL3")]
#[case::tcp_keep_alive("TCPKeepAlive no", "TCPKeepAlive no")]
#[case::tunnel("Tunnel point-to-point", "Tunnel point-to-point")]
#[case::tunnel_device("TunnelDevice 1", "TunnelDevice 1:any")]
#[case::update_host_keys("UpdateHostKeys ask", "UpdateHostKeys ask")]
#[case::user_blank("User \"  \"", "User \"  \"")]
#[case::verify_host_key_dns("VerifyHostKeyDNS ask", "VerifyHostKeyDNS ask")]
#[case::xauth_location("XAuthLocation /usr/X11/bin/xauth", "XAuthLocation /usr/X11/bin/xauth")]
fn decode_scalar(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(rendered(line), expected);
}

#[rstest]
#[case::control_path("controlPath ~/.ssh/cm-%r@%h:%p", "ControlPath ~/.ssh/cm-%r@%h:%p")]
#[case::control_path_none("ControlPath none", "ControlPath none")]
#[case::escape_char_none("EscapeChar none", "EscapeChar none")]
#[case::identity_agent("IdentityAgent ~/.1password/agent.sock", "IdentityAgent ~/.1password/agent.sock")]
#[case::pkcs11_provider("PKCS11Provider /usr/lib/opensc-pkcs11.so", "PKCS11Provider /usr/lib/opensc-pkcs11.so")]
fn decode_setting(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(rendered(line), expected);
}

// =============================================================================
// LISTS AND MAPS
// =============================================================================

#[rstest]
#[case::canonical_domains(
    "canonicalDomains example.com int.example.com",
    "CanonicalDomains example.com int.example.com"
)]
#[case::ca_signature_algorithms(
    "casignaturealgorithms ecdsa-sha2-nistp256,ecdsa-sha2-nistp384",
    "CASignatureAlgorithms ecdsa-sha2-nistp256,ecdsa-sha2-nistp384"
)]
#[case::ciphers_trimmed("ciphers aes256-ctr , aes256-cbc,", "Ciphers aes256-ctr,aes256-cbc")]
#[case::macs("MACs hmac-sha2-256,hmac-sha2-512", "MACs hmac-sha2-256,hmac-sha2-512")]
#[case::preferred_authentications(
    "PreferredAuthentications publickey,keyboard-interactive",
    "PreferredAuthentications publickey,keyboard-interactive"
)]
#[case::proxy_jump("ProxyJump A,B,C , D , E,", "ProxyJump A,B,C,D,E")]
#[case::revoked_host_keys(
    "RevokedHostKeys /etc/ssh/revoked  ~/.ssh/revoked",
    "RevokedHostKeys /etc/ssh/revoked ~/.ssh/revoked"
)]
#[case::delimited_takes_last("Ciphers a,b\n  Ciphers c", "Ciphers c")]
#[case::certificate_files(
    "CertificateFile ~/.ssh/ca1.pub\n  CertificateFile ~/.ssh/ca2.pub",
    "CertificateFile ~/.ssh/ca1.pub\n  CertificateFile ~/.ssh/ca2.pub"
)]
#[case::local_forward(
    "LocalForward 5901 computer.myHost.edu:5901",
    "LocalForward 5901 computer.myHost.edu:5901"
)]
#[case::pubkey_accepted_algorithms_per_line(
    "PubkeyAcceptedAlgorithms +ssh-rsa,ssh-dss",
    "PubkeyAcceptedAlgorithms +ssh-rsa,ssh-dss"
)]
#[case::send_env("SendEnv LANG\n  SendEnv LC_*", "SendEnv LANG\n  SendEnv LC_*")]
#[case::set_env_sorted("SetEnv LANG C\n  SetEnv FOO=bar", "SetEnv FOO=bar\n  SetEnv LANG=C")]
fn decode_collection(#[case] lines: &str, #[case] expected: &str) {
    assert_eq!(rendered(lines), expected);
}

#[test]
fn decode_typed_values() {
    let config = decode("Compression no\n  ForwardAgent /tmp/agent\n  IPQoS af41 ef\n  ForwardX11Timeout 1w3d").unwrap();
    let props = &config.hosts[0].properties;
    assert_eq!(props.compression, Some(YesNo::No));
    assert_eq!(props.forward_agent, Some(ForwardAgent::Socket("/tmp/agent".into())));
    assert_eq!(
        props.ipqos,
        Some(IpQos {
            interactive: Some(Quality::Class(IpQosClass::Af41)),
            non_interactive: Some(Quality::Class(IpQosClass::Ef)),
        })
    );
    assert_eq!(
        props.forward_x11_timeout,
        Some(TimeFormat {
            weeks: Some(1),
            days: Some(3),
            ..Default::default()
        })
    );
}

// =============================================================================
// ERRORS
// =============================================================================

#[rstest]
#[case::port_overflow("Port 65536", "port", "65536", "u16")]
#[case::max_dots_overflow("CanonicalizeMaxDots 256", "canonicalizemaxdots", "256", "u8")]
#[case::negative_timeout("ConnectTimeout -1", "connecttimeout", "-1", "u32")]
#[case::bad_octal("StreamLocalBindMask 0o8", "streamlocalbindmask", "0o8", "u32")]
#[case::yes_no("Compression maybe", "compression", "maybe", "YesNo")]
#[case::yes_no_case("Compression Yes", "compression", "Yes", "YesNo")]
#[case::keyword_case("AddressFamily INET", "addressfamily", "INET", "AddressFamily")]
#[case::time_format("ForwardX11Timeout 5x", "forwardx11timeout", "5x", "TimeFormat")]
#[case::ipqos_arity("IPQoS af21 cs1 ef", "ipqos", "af21 cs1 ef", "IpQos")]
#[case::tunnel_device("TunnelDevice any:tun0", "tunneldevice", "any:tun0", "TunnelDevice")]
#[case::list_element(
    "PreferredAuthentications publickey,magic",
    "preferredauthentications/1",
    "magic",
    "PreferredAuthentication"
)]
#[case::identity_agent("IdentityAgent $", "identityagent", "$", "IdentityAgent")]
fn decode_error(
    #[case] line: &str,
    #[case] path: &str,
    #[case] value: &str,
    #[case] target: &str,
) {
    match decode(line) {
        Err(SshconfError::Decode(DecodeError::UnableToDecode {
            path: actual_path,
            value: actual_value,
            target: actual_target,
        })) => {
            assert_eq!(actual_path, path);
            assert_eq!(actual_value, value);
            assert_eq!(actual_target, target);
        }
        other => panic!("expected UnableToDecode for {:?}, got {:?}", line, other),
    }
}

#[rstest]
#[case::empty_value("Host myserv\n  user\n", ParseError::EmptyValueToken)]
#[case::empty_value_after_equals("Host myserv\n  user=\n", ParseError::EmptyValueToken)]
#[case::blank_alias("Host \" \"\n", ParseError::NoAliasForHost)]
#[case::empty_key("Host a\n  =user\n", ParseError::EmptyKeyToken)]
#[case::no_properties("Host a\nHost b\n  Port 1\n", ParseError::NoPropertiesForHost)]
#[case::property_before_host("Port 22\n", ParseError::UnexpectedToken("Key(\"Port\")".into()))]
#[case::lowercase_host("host a\n  Port 1\n", ParseError::UnexpectedToken("Key(\"host\")".into()))]
#[case::illegal_delimiter(
    "Host a\n  User:root\n",
    ParseError::IllegalTokensDelimiter { after: "User".into(), delimiter: ':' }
)]
fn parse_error(#[case] content: &str, #[case] expected: ParseError) {
    match Config::parse(content) {
        Err(SshconfError::Parse(actual)) => assert_eq!(actual, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

// =============================================================================
// UNPARSED AND ROUND TRIP
// =============================================================================

#[test]
fn unknown_keys_are_kept_and_rendered_last() {
    let config = decode("Port 2021\n  UnKnOwN1 123\n  Unknown2 Hello world\n  unknown2 How are you?\n  User admin").unwrap();
    assert_eq!(
        config.to_string(),
        "Host x\n  Port 2021\n  User admin\n  UnKnOwN1 123\n  Unknown2 Hello world\n  Unknown2 How are you?"
    );
}

#[rstest]
#[case::dash("\"Foo-Bar\" baz", "\"Foo-Bar\" baz")]
#[case::space("\"Foo Bar\" baz", "\"Foo Bar\" baz")]
#[case::plain_in_quotes("\"Plain\" baz", "Plain baz")]
fn quoted_unknown_keys_round_trip(#[case] line: &str, #[case] expected: &str) {
    let config = decode(line).unwrap();
    assert_eq!(rendered(line), expected);

    let reparsed = Config::parse(&config.to_string()).unwrap();
    assert_eq!(reparsed, config);
}

#[test]
fn realistic_config_round_trips() {
    let content = r#"
# Personal hosts
Host github.com  gitlab.com
  User git
  IdentityFile ~/.ssh/id_ed25519
  IdentitiesOnly yes

Host bastion
  HostName 203.0.113.10
  User ops
  ControlMaster auto
  ControlPath ~/.ssh/cm-%r@%h:%p
  ControlPersist 10m
  ServerAliveInterval 30

Host db-? app-*
  ProxyJump bastion
  LocalForward 5432 localhost:5432
  RemoteForward 9000 localhost:9000
  SetEnv TERM=xterm-256color
  ForwardAgent no

Host *
  AddKeysToAgent yes
  HashKnownHosts yes
  RekeyLimit default none
  UseKeychain yes
"#;
    let config = Config::parse(content).unwrap();
    assert_eq!(config.hosts.len(), 4);

    let rendered = config.to_string();
    let reparsed = Config::parse(&rendered).unwrap();
    assert_eq!(reparsed, config);
    assert_eq!(reparsed.to_string(), rendered);
}
