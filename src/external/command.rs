use crate::core::{TipOracle, Transaction, TransactionValidator};
use crate::error::{MinerError, Result};
use std::path::PathBuf;
use std::process::Command;

/// Tip oracle backed by an external executable.
///
/// Invoked as `<program> --db <db_path>`; a successful run prints the
/// authoritative tip hash on stdout. Spawn failure, a nonzero exit, or
/// empty output all count as `OracleUnreachable`, which the tip selector
/// recovers from by scanning locally.
pub struct CommandTipOracle {
    program: String,
    db_path: PathBuf,
}

impl CommandTipOracle {
    pub fn new(program: &str, db_path: PathBuf) -> CommandTipOracle {
        CommandTipOracle {
            program: program.to_string(),
            db_path,
        }
    }
}

impl TipOracle for CommandTipOracle {
    fn best_tip_hash(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("--db")
            .arg(&self.db_path)
            .output()
            .map_err(|e| MinerError::OracleUnreachable(e.to_string()))?;

        if !output.status.success() {
            return Err(MinerError::OracleUnreachable(format!(
                "{} exited with {}",
                self.program, output.status
            )));
        }

        let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if hash.is_empty() {
            return Err(MinerError::OracleUnreachable(format!(
                "{} produced no tip hash",
                self.program
            )));
        }
        Ok(hash)
    }
}

/// Transaction validator backed by an external executable.
///
/// Invoked as `<program> --con-path <con_path> transaction <tx_hash>`;
/// exit status zero means valid. A spawn failure is `ValidatorUnreachable`
/// and is handled by intake's configured fallback policy.
pub struct CommandValidator {
    program: String,
    con_path: PathBuf,
}

impl CommandValidator {
    pub fn new(program: &str, con_path: PathBuf) -> CommandValidator {
        CommandValidator {
            program: program.to_string(),
            con_path,
        }
    }
}

impl TransactionValidator for CommandValidator {
    fn is_valid(&self, tx: &Transaction) -> Result<bool> {
        let status = Command::new(&self.program)
            .arg("--con-path")
            .arg(&self.con_path)
            .arg("transaction")
            .arg(tx.get_hash())
            .status()
            .map_err(|e| MinerError::ValidatorUnreachable(e.to_string()))?;

        Ok(status.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_oracle_binary_is_unreachable() {
        let oracle = CommandTipOracle::new(
            "con-pick-binary-that-does-not-exist",
            PathBuf::from("/tmp/nowhere"),
        );
        assert!(matches!(
            oracle.best_tip_hash(),
            Err(MinerError::OracleUnreachable(_))
        ));
    }

    #[test]
    fn test_missing_validator_binary_is_unreachable() {
        let validator = CommandValidator::new(
            "con-valid-binary-that-does-not-exist",
            PathBuf::from("/tmp/nowhere"),
        );
        let tx = Transaction::new("t1", "X", "Y", 1);
        assert!(matches!(
            validator.is_valid(&tx),
            Err(MinerError::ValidatorUnreachable(_))
        ));
    }

    #[test]
    fn test_oracle_reads_stdout_hash() {
        // `echo` stands in for the real oracle; it ignores --db and prints
        // its arguments, so the trimmed stdout is the "hash"
        let oracle = CommandTipOracle::new("echo", PathBuf::from("abc123"));
        let hash = oracle.best_tip_hash().unwrap();
        assert_eq!(hash, "--db abc123");
    }

    #[test]
    fn test_validator_maps_exit_status() {
        let tx = Transaction::new("t1", "X", "Y", 1);

        let valid = CommandValidator::new("true", PathBuf::from("/tmp"));
        assert!(valid.is_valid(&tx).unwrap());

        let invalid = CommandValidator::new("false", PathBuf::from("/tmp"));
        assert!(!invalid.is_valid(&tx).unwrap());
    }
}
