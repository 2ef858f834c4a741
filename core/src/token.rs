//! Token program instruction sets.
//!
//! Thin sequencing over the `spl-token` and `spl-associated-token-account`
//! builders. Byte layouts and encodings belong to those crates.

use rand::RngCore;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::Keypair,
    signer::keypair::keypair_from_seed,
    system_instruction,
};

use crate::config::MINT_ACCOUNT_LEN;
use crate::error::{TransactionError, TransactionResult};

/// Generate a fresh key pair for a new mint account.
///
/// Seeded from `rand`'s OS generator so the same code path works natively and
/// in the browser.
pub fn generate_mint_identity() -> TransactionResult<Keypair> {
    let mut seed = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut seed);
    keypair_from_seed(&seed).map_err(|e| TransactionError::Signing(e.to_string()))
}

/// Instructions that allocate a mint account and initialize it.
///
/// The account is funded by `payer`, sized for a mint and owned by the token
/// program. `payer` becomes both mint and freeze authority.
pub fn create_mint_instructions(
    payer: &Pubkey,
    mint: &Pubkey,
    lamports: u64,
    decimals: u8,
) -> TransactionResult<Vec<Instruction>> {
    let create_account = system_instruction::create_account(
        payer,
        mint,
        lamports,
        MINT_ACCOUNT_LEN as u64,
        &spl_token::id(),
    );
    let initialize_mint = spl_token::instruction::initialize_mint2(
        &spl_token::id(),
        mint,
        payer,
        Some(payer),
        decimals,
    )?;
    Ok(vec![create_account, initialize_mint])
}

/// Associated token account of `owner` for `mint`.
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(owner, mint)
}

/// Instructions that create the owner's associated token account (if it does
/// not exist yet) and mint `amount` base units into it.
///
/// `owner` pays for the account and signs as mint authority.
pub fn mint_supply_instructions(
    owner: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> TransactionResult<Vec<Instruction>> {
    let token_account = associated_token_address(owner, mint);
    let create_token_account =
        spl_associated_token_account::instruction::create_associated_token_account_idempotent(
            owner,
            owner,
            mint,
            &spl_token::id(),
        );
    let mint_to = spl_token::instruction::mint_to(
        &spl_token::id(),
        mint,
        &token_account,
        owner,
        &[],
        amount,
    )?;
    Ok(vec![create_token_account, mint_to])
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;
    use spl_token::instruction::TokenInstruction;

    #[test]
    fn test_mint_identities_are_unique() {
        let a = generate_mint_identity().unwrap();
        let b = generate_mint_identity().unwrap();
        assert_ne!(a.pubkey(), b.pubkey());
    }

    #[test]
    fn test_create_mint_instructions() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let ixs = create_mint_instructions(&payer, &mint, 1_461_600, 9).unwrap();

        assert_eq!(ixs.len(), 2);
        assert_eq!(ixs[0].program_id, solana_sdk::system_program::id());
        assert_eq!(ixs[0].accounts[0].pubkey, payer);
        assert_eq!(ixs[0].accounts[1].pubkey, mint);
        assert!(ixs[0].accounts[1].is_signer);

        assert_eq!(ixs[1].program_id, spl_token::id());
        match TokenInstruction::unpack(&ixs[1].data).unwrap() {
            TokenInstruction::InitializeMint2 {
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                assert_eq!(decimals, 9);
                assert_eq!(mint_authority, payer);
                assert_eq!(Option::<Pubkey>::from(freeze_authority), Some(payer));
            }
            other => panic!("unexpected instruction {:?}", other),
        }
    }

    #[test]
    fn test_mint_supply_instructions() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let ixs = mint_supply_instructions(&owner, &mint, 100_000_000_000).unwrap();

        assert_eq!(ixs.len(), 2);
        assert_eq!(ixs[0].program_id, spl_associated_token_account::id());
        assert_eq!(ixs[1].program_id, spl_token::id());
        assert_eq!(ixs[1].accounts[1].pubkey, associated_token_address(&owner, &mint));
        match TokenInstruction::unpack(&ixs[1].data).unwrap() {
            TokenInstruction::MintTo { amount } => assert_eq!(amount, 100_000_000_000),
            other => panic!("unexpected instruction {:?}", other),
        }
    }
}
