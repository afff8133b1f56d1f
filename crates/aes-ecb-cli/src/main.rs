//! Command-line interface for `aes-ecb`.

#![forbid(unsafe_code)]

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use aes_core::{decrypt_block, encrypt_block, expand_key, Aes128Key};
use aes_ecb::{decrypt_file, derive_key, encrypt_file, EcbConfig, Padding};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 ECB file encryption keyed by a password.
///
/// Passwords are taken as raw argument bytes and need not be valid UTF-8.
///
/// The password is XOR-folded into the key and ECB reveals repeated blocks;
/// this tool exists for compatibility, not for protecting secrets.
#[derive(Parser)]
#[command(name = "aesfile", version, author, about)]
struct Cli {
    /// Process blocks on a single thread.
    #[arg(long, global = true)]
    serial: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file.
    Encrypt {
        /// Plaintext input file.
        input: PathBuf,
        /// Ciphertext output file.
        output: PathBuf,
        /// Password the key is derived from.
        password: OsString,
    },
    /// Decrypt a file produced by `encrypt`.
    Decrypt {
        /// Ciphertext input file (a multiple of 16 bytes).
        input: PathBuf,
        /// Plaintext output file.
        output: PathBuf,
        /// Password the key is derived from.
        password: OsString,
    },
    /// Print the AES key a password reduces to, as hex.
    DeriveKey {
        /// Password to reduce.
        password: OsString,
    },
    /// Check the cipher against the FIPS-197 vector and random round trips.
    SelfTest {
        /// Number of random blocks to round-trip.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
        Err(err) => err.exit(),
    };
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = EcbConfig {
        parallel: !cli.serial,
    };
    match cli.command {
        Commands::Encrypt {
            input,
            output,
            password,
        } => cmd_encrypt(&input, &output, &password, config),
        Commands::Decrypt {
            input,
            output,
            password,
        } => cmd_decrypt(&input, &output, &password, config),
        Commands::DeriveKey { password } => cmd_derive_key(&password),
        Commands::SelfTest { samples, seed } => cmd_self_test(samples, seed),
    }
}

fn cmd_encrypt(input: &Path, output: &Path, password: &OsStr, config: EcbConfig) -> Result<()> {
    encrypt_file(input, output, password.as_encoded_bytes(), config)
        .context("encryption failed")?;
    Ok(())
}

fn cmd_decrypt(input: &Path, output: &Path, password: &OsStr, config: EcbConfig) -> Result<()> {
    let report = decrypt_file(input, output, password.as_encoded_bytes(), config)
        .context("decryption failed")?;
    match report.padding {
        Some(Padding::OutOfRange(n)) => {
            eprintln!("warning: invalid padding detected (last byte {n:#04x}); output kept as is");
        }
        Some(Padding::Inconsistent(n)) => {
            eprintln!("warning: inconsistent padding detected (length {n}); output kept as is");
        }
        _ => {}
    }
    println!("File decryption completed successfully.");
    Ok(())
}

fn cmd_derive_key(password: &OsStr) -> Result<()> {
    let key = derive_key(password.as_encoded_bytes())?;
    println!("{}", hex::encode(key.0));
    Ok(())
}

fn cmd_self_test(samples: usize, seed: Option<u64>) -> Result<()> {
    let key = parse_key_hex("000102030405060708090a0b0c0d0e0f")?;
    let round_keys = expand_key(&key);
    let plain = parse_block_hex("00112233445566778899aabbccddeeff")?;
    let expected = parse_block_hex("69c4e0d86a7b0430d8cdb78070b4c55a")?;

    let ciphertext = encrypt_block(&plain, &round_keys);
    println!("known-answer ciphertext: {}", hex::encode(ciphertext));
    if ciphertext != expected {
        bail!("known-answer encryption mismatch");
    }
    if decrypt_block(&ciphertext, &round_keys) != plain {
        bail!("known-answer decryption mismatch");
    }

    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let mut key_bytes = [0u8; 16];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        rng.fill_bytes(&mut block);
        let round_keys = expand_key(&Aes128Key::from(key_bytes));
        let ct = encrypt_block(&block, &round_keys);
        if decrypt_block(&ct, &round_keys) != block {
            bail!(
                "round trip failed for key {} block {}",
                hex::encode(key_bytes),
                hex::encode(block)
            );
        }
    }
    println!("self-test passed ({samples} random round trips)");
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Ok(Aes128Key::try_from(bytes.as_slice())?)
}

fn parse_block_hex(hex_str: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    Ok(aes_core::block_from_slice(&bytes)?)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_encrypt_arguments() {
        let cli = Cli::try_parse_from(["aesfile", "encrypt", "in.bin", "out.enc", "pw"])
            .expect("valid arguments");
        assert!(!cli.serial);
        match cli.command {
            Commands::Encrypt {
                input,
                output,
                password,
            } => {
                assert_eq!(input, PathBuf::from("in.bin"));
                assert_eq!(output, PathBuf::from("out.enc"));
                assert_eq!(password, OsString::from("pw"));
            }
            _ => panic!("expected encrypt"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_password_keeps_raw_bytes() {
        use std::os::unix::ffi::OsStringExt;

        let raw = vec![0xff, b'p', b'w'];
        let args = [
            OsString::from("aesfile"),
            OsString::from("derive-key"),
            OsString::from_vec(raw.clone()),
        ];
        let cli = Cli::try_parse_from(args).expect("non-UTF-8 password accepted");
        match cli.command {
            Commands::DeriveKey { password } => {
                assert_eq!(password.as_encoded_bytes(), &raw[..]);
                let key = derive_key(password.as_encoded_bytes()).expect("non-empty");
                assert_eq!(&key.0[..3], &raw[..]);
            }
            _ => panic!("expected derive-key"),
        }
    }

    #[test]
    fn serial_flag_is_global() {
        let cli = Cli::try_parse_from(["aesfile", "decrypt", "a", "b", "c", "--serial"])
            .expect("valid arguments");
        assert!(cli.serial);
    }

    #[test]
    fn missing_password_is_rejected() {
        assert!(Cli::try_parse_from(["aesfile", "encrypt", "in", "out"]).is_err());
    }

    #[test]
    fn self_test_passes() {
        cmd_self_test(8, Some(42)).expect("self-test");
    }

    #[test]
    fn parse_helpers_check_lengths() {
        assert!(parse_key_hex("0011").is_err());
        assert!(parse_block_hex("zz").is_err());
        assert!(parse_key_hex("000102030405060708090a0b0c0d0e0f").is_ok());
    }
}
